//! Entrance animation for a freshly rendered profile.
//!
//! The whole sequence is timer-driven: a quick fade-and-rise for the
//! container, then a grow-in for every bar inside it. Each step re-checks
//! that the container is still attached to the document, so tearing the
//! widget out of the page mid-sequence stops the remaining steps instead of
//! mutating a detached subtree.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Delay before the fade-in transition starts.
const FADE_IN_DELAY_MS: u32 = 100;
/// Additional delay before bar widths are captured and reset (600 ms from
/// the start of the sequence).
const BAR_RESET_DELAY_MS: u32 = 500;
/// Delay between resetting bars to zero and growing them back.
const BAR_GROW_DELAY_MS: u32 = 300;

/// Run the fade/grow-in sequence on the container with the given id.
/// A missing container is a silent no-op.
pub async fn animate_profile(container_id: &str) {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(container) = container else {
        return;
    };

    let style = container.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(20px)");

    TimeoutFuture::new(FADE_IN_DELAY_MS).await;
    if !container.is_connected() {
        return;
    }
    let _ = style.set_property("transition", "opacity 0.5s ease, transform 0.5s ease");
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");

    TimeoutFuture::new(BAR_RESET_DELAY_MS).await;
    if !container.is_connected() {
        return;
    }

    // Capture each bar's target width, collapse it, then grow it back.
    let bars = collect_bars(&container);
    let widths: Vec<String> = bars
        .iter()
        .map(|bar| bar.style().get_property_value("width").unwrap_or_default())
        .collect();
    for bar in &bars {
        let _ = bar.style().set_property("width", "0");
    }

    TimeoutFuture::new(BAR_GROW_DELAY_MS).await;
    if !container.is_connected() {
        return;
    }
    for (bar, width) in bars.iter().zip(&widths) {
        let _ = bar.style().set_property("transition", "width 1s ease");
        let _ = bar.style().set_property("width", width);
    }
}

/// Every bar-like element inside the container, in document order.
fn collect_bars(container: &HtmlElement) -> Vec<HtmlElement> {
    let mut bars = Vec::new();
    let Ok(list) = container.query_selector_all(".category-bar, .score-fill") else {
        return bars;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(bar) = node.dyn_into::<HtmlElement>() {
                bars.push(bar);
            }
        }
    }
    bars
}
