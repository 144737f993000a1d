//! Minimalistic styles - no external CSS files
//!
//! Clean, practical design with light/dark theme support.

use webgenie_core::SortIndicator;

// ============================================================================
// Layout
// ============================================================================

/// Generate app style based on theme
pub fn app_style(dark: bool) -> String {
    let (bg, fg) = if dark {
        ("#0d1117", "#c9d1d9")
    } else {
        ("#ffffff", "#1a1a1a")
    };
    format!(
        "min-height: 100vh; \
         display: flex; \
         flex-direction: column; \
         font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif; \
         font-size: 14px; \
         background: {bg}; \
         color: {fg}; \
         line-height: 1.5; \
         margin: 0; \
         padding: 0;"
    )
}

/// Generate header style
pub fn header_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         gap: 1rem; \
         padding: 0.75rem 1rem; \
         background: {bg}; \
         border-bottom: 1px solid {border};"
    )
}

/// Generate title style
pub fn title_style(_dark: bool) -> &'static str {
    "font-size: 1.1rem; \
     font-weight: 600; \
     margin: 0;"
}

/// Generate theme toggle button style
pub fn toggle_btn_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#21262d", "#c9d1d9", "#30363d")
    } else {
        ("#f6f8fa", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.35rem 0.75rem; \
         font-family: inherit; \
         font-size: 0.8rem; \
         border-radius: 6px; \
         cursor: pointer;"
    )
}

pub fn nav_style(_dark: bool) -> &'static str {
    "display: flex; \
     gap: 0.25rem; \
     flex: 1;"
}

/// Page tab in the header
pub fn tab_style(dark: bool, active: bool) -> String {
    let (bg, fg) = match (dark, active) {
        (true, true) => ("#21262d", "#f0f6fc"),
        (true, false) => ("transparent", "#8b949e"),
        (false, true) => ("#ffffff", "#1a1a1a"),
        (false, false) => ("transparent", "#57606a"),
    };
    let weight = if active { 600 } else { 400 };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: none; \
         padding: 0.35rem 0.9rem; \
         border-radius: 6px; \
         font-family: inherit; \
         font-size: 0.85rem; \
         font-weight: {weight}; \
         cursor: pointer;"
    )
}

/// Main content area style
pub fn main_content_style(dark: bool) -> String {
    let bg = if dark { "#0d1117" } else { "#ffffff" };
    format!(
        "flex: 1; \
         padding: 1.5rem 2rem; \
         overflow-y: auto; \
         background: {bg};"
    )
}

/// Page title style
pub fn page_title_style(dark: bool) -> String {
    let fg = if dark { "#c9d1d9" } else { "#1a1a1a" };
    format!(
        "font-size: 1.5rem; \
         font-weight: 600; \
         color: {fg}; \
         margin: 0 0 0.25rem 0;"
    )
}

/// Generate muted text style
pub fn muted_style(_dark: bool) -> &'static str {
    "color: #6e7681;"
}

// ============================================================================
// Cards
// ============================================================================

/// Section card style
pub fn card_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#ffffff", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 8px; \
         margin: 1rem 0; \
         overflow: hidden;"
    )
}

pub fn card_header_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#21262d", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         flex-wrap: wrap; \
         gap: 0.75rem; \
         padding: 0.75rem 1rem; \
         background: {bg}; \
         border-bottom: 1px solid {border};"
    )
}

pub fn card_title_style(dark: bool) -> String {
    let fg = if dark { "#c9d1d9" } else { "#1a1a1a" };
    format!(
        "font-size: 1rem; \
         font-weight: 600; \
         color: {fg};"
    )
}

pub fn stats_grid_style(_dark: bool) -> &'static str {
    "display: grid; \
     grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); \
     gap: 1rem; \
     margin: 1rem 0;"
}

pub fn stat_card_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 8px; \
         padding: 0.75rem 1rem;"
    )
}

pub fn stat_value_style(_dark: bool) -> &'static str {
    "font-size: 1.4rem; \
     font-weight: 600;"
}

pub fn stat_label_style(_dark: bool) -> &'static str {
    "font-size: 0.75rem; \
     color: #6e7681; \
     text-transform: uppercase; \
     letter-spacing: 0.5px;"
}

// ============================================================================
// Controls
// ============================================================================

pub fn toolbar_style(_dark: bool) -> &'static str {
    "display: flex; \
     flex-wrap: wrap; \
     align-items: center; \
     gap: 0.5rem;"
}

/// Search input style
pub fn search_input_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#0d1117", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "min-width: 220px; \
         box-sizing: border-box; \
         padding: 0.4rem 0.75rem; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         font-family: inherit; \
         font-size: 0.85rem; \
         outline: none;"
    )
}

pub fn select_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#0d1117", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "padding: 0.4rem 0.5rem; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         font-family: inherit; \
         font-size: 0.85rem;"
    )
}

/// Metric toggle chip
pub fn chip_style(dark: bool, active: bool, locked: bool) -> String {
    let (bg, fg, border) = match (dark, active) {
        (_, true) => ("#3b82f6", "#ffffff", "#3b82f6"),
        (true, false) => ("transparent", "#8b949e", "#30363d"),
        (false, false) => ("transparent", "#57606a", "#d0d7de"),
    };
    let cursor = if locked { "default" } else { "pointer" };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.2rem 0.65rem; \
         border-radius: 999px; \
         font-family: inherit; \
         font-size: 0.75rem; \
         cursor: {cursor};"
    )
}

/// Secondary action button (exports)
pub fn action_btn_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#21262d", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.3rem 0.7rem; \
         border-radius: 6px; \
         font-family: inherit; \
         font-size: 0.8rem; \
         cursor: pointer;"
    )
}

// ============================================================================
// Table
// ============================================================================

pub fn table_wrapper_style(_dark: bool) -> &'static str {
    "overflow-x: auto;"
}

pub fn table_style(_dark: bool) -> &'static str {
    "width: 100%; \
     border-collapse: collapse; \
     font-size: 0.85rem;"
}

pub fn th_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#161b22", "#8b949e", "#30363d")
    } else {
        ("#f6f8fa", "#57606a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         text-align: left; \
         padding: 0.6rem 1rem; \
         font-size: 0.75rem; \
         font-weight: 500; \
         text-transform: uppercase; \
         letter-spacing: 0.5px; \
         border-bottom: 1px solid {border}; \
         white-space: nowrap;"
    )
}

/// Header button of a sortable column
pub fn sort_btn_style(_dark: bool) -> &'static str {
    "background: none; \
     border: none; \
     padding: 0; \
     color: inherit; \
     font: inherit; \
     text-transform: inherit; \
     letter-spacing: inherit; \
     cursor: pointer; \
     display: inline-flex; \
     align-items: center; \
     gap: 0.35rem;"
}

pub fn sort_icon_style(dark: bool, indicator: SortIndicator) -> String {
    let (fg, opacity) = match indicator {
        SortIndicator::None => (if dark { "#6e7681" } else { "#8c959f" }, "0.5"),
        _ => (if dark { "#58a6ff" } else { "#0969da" }, "1"),
    };
    format!("color: {fg}; opacity: {opacity}; font-size: 0.8rem;")
}

pub fn tr_style(dark: bool, clickable: bool) -> String {
    let border = if dark { "#21262d" } else { "#eaeef2" };
    let cursor = if clickable { "pointer" } else { "default" };
    format!(
        "border-bottom: 1px solid {border}; \
         cursor: {cursor};"
    )
}

pub fn td_style(_dark: bool) -> &'static str {
    "padding: 0.6rem 1rem; \
     white-space: nowrap;"
}

/// Placeholder cell shown when there are no rows
pub fn empty_cell_style(_dark: bool) -> &'static str {
    "padding: 2rem; \
     text-align: center; \
     color: #6e7681;"
}

// ============================================================================
// Badges and bars
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Info,
}

/// Pill badge
pub fn badge_style(dark: bool, tone: Tone) -> String {
    let (bg, fg) = match (tone, dark) {
        (Tone::Neutral, true) => ("#30363d", "#8b949e"),
        (Tone::Neutral, false) => ("#e1e4e8", "#57606a"),
        (Tone::Success, true) => ("rgba(63, 185, 80, 0.15)", "#3fb950"),
        (Tone::Success, false) => ("#dafbe1", "#1a7f37"),
        (Tone::Warning, true) => ("rgba(210, 153, 34, 0.15)", "#d29922"),
        (Tone::Warning, false) => ("#fff8c5", "#9a6700"),
        (Tone::Info, true) => ("rgba(88, 166, 255, 0.15)", "#58a6ff"),
        (Tone::Info, false) => ("#ddf4ff", "#0969da"),
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         padding: 0.1rem 0.5rem; \
         border-radius: 999px; \
         font-size: 0.75rem; \
         font-weight: 500;"
    )
}

/// Colored dot before an algorithm name
pub fn dot_style(color: &str) -> String {
    format!(
        "display: inline-block; \
         width: 8px; \
         height: 8px; \
         border-radius: 50%; \
         margin-right: 0.5rem; \
         background: {color};"
    )
}

pub fn score_track_style(dark: bool) -> String {
    let bg = if dark { "#21262d" } else { "#eaeef2" };
    format!(
        "display: inline-block; \
         width: 80px; \
         height: 6px; \
         border-radius: 3px; \
         overflow: hidden; \
         vertical-align: middle; \
         margin-right: 0.5rem; \
         background: {bg};"
    )
}

/// Fill of a score bar, `score` in `0..=1`
pub fn score_fill_style(score: f64) -> String {
    let width = (score.clamp(0.0, 1.0) * 100.0).round();
    format!(
        "display: block; \
         height: 100%; \
         width: {width}%; \
         background: #3b82f6;"
    )
}

// ============================================================================
// Modal
// ============================================================================

pub fn modal_overlay_style(_dark: bool) -> &'static str {
    "position: fixed; \
     inset: 0; \
     background: rgba(0, 0, 0, 0.6); \
     display: flex; \
     align-items: center; \
     justify-content: center; \
     z-index: 1000;"
}

pub fn modal_content_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#ffffff", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 12px; \
         padding: 1.5rem; \
         width: min(560px, 92vw); \
         box-shadow: 0 8px 24px rgba(0,0,0,0.4);"
    )
}

pub fn close_btn_style(dark: bool) -> String {
    let fg = if dark { "#8b949e" } else { "#57606a" };
    format!(
        "background: none; \
         border: none; \
         color: {fg}; \
         font-size: 1rem; \
         cursor: pointer;"
    )
}

pub fn detail_grid_style(_dark: bool) -> &'static str {
    "display: grid; \
     grid-template-columns: 1fr 1fr; \
     gap: 0.75rem 1.5rem; \
     margin-top: 1rem;"
}

// ============================================================================
// States
// ============================================================================

/// Generate loading style
pub fn loading_style(_dark: bool) -> &'static str {
    "padding: 2rem; \
     text-align: center;"
}

/// Generate error style
pub fn error_style(dark: bool) -> String {
    let border = if dark { "#f85149" } else { "#cf222e" };
    format!(
        "padding: 1rem; \
         border: 1px solid {border}; \
         border-radius: 8px; \
         margin: 1rem 0;"
    )
}

/// Generate code/mono style
pub fn code_style(dark: bool) -> String {
    let (bg, fg) = if dark {
        ("#21262d", "#79c0ff")
    } else {
        ("#f6f8fa", "#0550ae")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         padding: 0.2rem 0.5rem; \
         border-radius: 4px; \
         font-size: 0.85rem; \
         font-family: 'SF Mono', 'Fira Code', monospace;"
    )
}

/// Algorithm colors
pub const CHART_COLORS: [&str; 10] = [
    "#3fb950", // green
    "#58a6ff", // blue
    "#f78166", // orange/red
    "#a371f7", // purple
    "#f9c513", // yellow
    "#39d353", // bright green
    "#79c0ff", // light blue
    "#ff7b72", // red
    "#d2a8ff", // light purple
    "#ffa657", // orange
];

/// Stable color for a name
pub fn color_for(name: &str) -> &'static str {
    let hash = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    CHART_COLORS[hash % CHART_COLORS.len()]
}
