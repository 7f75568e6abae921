//! Pure HTML generation for profiles and badges.
//!
//! Everything here is string-in, string-out so it can be tested natively.
//! Markup carries fixed class names (`social-profile`, `category-item`, …)
//! styled by the host page's stylesheet. Payload text is trusted and
//! interpolated as-is.

use helvania_shared::{CategoryDistribution, SocialProfile, CATEGORIES};

/// Score formatted with an explicit plus for positive values.
pub fn signed_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// CSS class for a score: `negative` below -10, `positive` above 10,
/// `neutral` in between.
pub fn score_class(score: i32) -> &'static str {
    if score < -10 {
        "negative"
    } else if score > 10 {
        "positive"
    } else {
        "neutral"
    }
}

/// Full profile markup: header with icon pair and score meter, the
/// five-category breakdown, the description, and the trend line.
///
/// The score-fill width is the raw score magnitude used as a percentage.
/// It is intentionally not clamped; a score beyond ±100 overflows the bar.
pub fn profile_html(profile: &SocialProfile) -> String {
    let score_class = score_class(profile.total_score);

    format!(
        r#"<div class="social-profile" data-player="{player}">
    <div class="profile-header">
        <div class="main-icons">
            <span class="main-icon">{main_icon}</span>
            <span class="sub-icon">{sub_icon}</span>
        </div>
        <h3 class="profile-name">{full_name}</h3>
        <p class="profile-subtitle">Social profile</p>
        <div class="score-display">
            <div class="score-number {score_class}">{score}</div>
            <div class="score-meter">
                <div class="score-fill {score_class}" style="width: {fill}%"></div>
            </div>
            <div class="score-label">/100</div>
        </div>
    </div>
    <div class="category-distribution">
        <h4>Category breakdown:</h4>
        {bars}
    </div>
    <div class="profile-description">{description}</div>
    <div class="profile-trend trend-{trend}">Trend: {trend_label}</div>
</div>"#,
        player = profile.player_id,
        main_icon = profile.icons.main.icon,
        sub_icon = profile.icons.sub.icon,
        full_name = profile.icons.full_name,
        score = signed_score(profile.total_score),
        fill = profile.total_score.abs(),
        bars = category_bars_html(&profile.category_distribution),
        description = profile.description,
        trend = profile.trend.as_str(),
        trend_label = profile.trend.label(),
    )
}

/// One row per category, always all five and always in table order. A key
/// missing from the payload renders as 0.
pub fn category_bars_html(distribution: &CategoryDistribution) -> String {
    CATEGORIES
        .iter()
        .map(|category| {
            let percentage = distribution.percentage(category.id);
            format!(
                r#"<div class="category-item">
            <span class="category-icon">{icon}</span>
            <span class="category-name">{name}</span>
            <div class="category-bar-container">
                <div class="category-bar {id}" style="width: {percentage}%"></div>
            </div>
            <span class="category-percentage">{percentage}%</span>
        </div>"#,
                icon = category.icon,
                name = category.name,
                id = category.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Inner markup of a compact player badge.
pub fn badge_html(profile: &SocialProfile) -> String {
    format!(
        r#"<span class="badge-icons">{icons}</span><span class="badge-score">{score}</span>"#,
        icons = profile.icons.display,
        score = signed_score(profile.total_score),
    )
}
