//! Check table screen

use chrono::{DateTime, Local, Utc};
use ratatui::style::Modifier;

use super::{retry_hint, truncate, ScreenViewModel, ViewLine};
use crate::domain_models::PrTarget;
use crate::state::{scroll_window, CheckSummary, SessionState};
use crate::theme::Theme;

const STATUS_WIDTH: usize = 12;
const DURATION_WIDTH: usize = 12;

pub fn build(
    state: &SessionState,
    target: &PrTarget,
    theme: &Theme,
    now: DateTime<Local>,
) -> ScreenViewModel {
    let width = state.width as usize;
    let mut body = vec![header_line(target, width, now, theme)];

    if let Some(err) = &state.error {
        body.push(ViewLine::styled(format!("Error: {}", err), theme.error()));
        if let (Some(updated), Some(_)) = (state.last_updated, &state.pr_data) {
            body.push(ViewLine::styled(
                format!("Last successful update: {}", updated.format("%H:%M:%S")),
                theme.dim(),
            ));
        }
        body.push(ViewLine::blank());
        body.push(ViewLine::styled(retry_hint(state.can_go_back), theme.dim()));
        return ScreenViewModel { body, footer: None };
    }

    let Some(data) = &state.pr_data else {
        body.push(ViewLine::blank());
        body.push(ViewLine::styled("Fetching PR data...", theme.text()));
        return ScreenViewModel { body, footer: None };
    };

    body.push(ViewLine::styled(data.title.clone(), theme.text()));
    let mut info = format!("Branch: {}", data.head_ref_name);
    if !data.url.is_empty() {
        info.push_str(&format!("    URL: {}", data.url));
    }
    body.push(ViewLine::styled(info, theme.dim()));
    body.push(ViewLine::blank());

    let summary = state.summary();
    body.push(ViewLine::styled(summary_text(&summary), theme.bold()));
    body.push(ViewLine::blank());

    let checks = state.filtered_checks();
    if summary.total == 0 {
        body.push(ViewLine::styled("No checks found for this PR.", theme.text()));
    } else if checks.is_empty() {
        body.push(ViewLine::styled(
            "All checks hidden (s: show skipped)",
            theme.dim(),
        ));
    } else {
        body.push(ViewLine::styled(
            format!(
                "  {:<status$}{:<duration$}NAME",
                "STATUS",
                "DURATION",
                status = STATUS_WIDTH - 2,
                duration = DURATION_WIDTH
            ),
            theme.underlined(),
        ));

        let visible = state.visible_rows();
        let offset = scroll_window(state.selected, state.scroll_offset, checks.len(), visible);
        let name_width = width.saturating_sub(STATUS_WIDTH + DURATION_WIDTH);
        let now = now.with_timezone(&Utc);

        for (idx, check) in checks.iter().enumerate().skip(offset).take(visible) {
            let selected = idx == state.selected;
            let marker = if selected { "> " } else { "  " };
            let (status_style, rest_style) = if selected {
                (
                    theme.status(check.status).add_modifier(Modifier::REVERSED),
                    theme.text().add_modifier(Modifier::REVERSED),
                )
            } else {
                (theme.status(check.status), theme.text())
            };

            let name = if name_width == 0 {
                String::new()
            } else {
                truncate(&check.name, name_width)
            };

            body.push(
                ViewLine::styled(
                    format!(
                        "{}{:<width$}",
                        marker,
                        check.status.to_string(),
                        width = STATUS_WIDTH - 2
                    ),
                    status_style,
                )
                .span(
                    format!(
                        "{:<width$}",
                        check.display_duration(now),
                        width = DURATION_WIDTH
                    ),
                    rest_style,
                )
                .span(name, rest_style),
            );
        }
    }

    ScreenViewModel {
        body,
        footer: Some(ViewLine::styled(footer_text(state, width), theme.dim())),
    }
}

/// "PR Checks - owner/repo #42" with the clock right-aligned
fn header_line(target: &PrTarget, width: usize, now: DateTime<Local>, theme: &Theme) -> ViewLine {
    let title = format!("PR Checks - {}", target);
    let clock = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let pad = width
        .saturating_sub(title.chars().count() + clock.chars().count())
        .max(1);
    ViewLine::styled(
        format!("{}{}{}", title, " ".repeat(pad), clock),
        theme.bold(),
    )
}

fn summary_text(summary: &CheckSummary) -> String {
    let mut text = format!("Checks: {} total", summary.total);

    let parts: Vec<String> = [
        (summary.passed, "passed"),
        (summary.running, "running"),
        (summary.failed, "failed"),
        (summary.skipped, "skipped"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{} {}", count, label))
    .collect();

    if !parts.is_empty() {
        text.push_str(" - ");
        text.push_str(&parts.join(", "));
    }
    if summary.hidden > 0 {
        text.push_str(&format!(" ({} hidden)", summary.hidden));
    }
    text
}

/// Key hints for the Viewing footer
///
/// Each hint carries the rank it is dropped at when the line is wider than
/// `width`. `q: quit` is always kept.
fn footer_text(state: &SessionState, width: usize) -> String {
    let toggle = if state.hide_skipped {
        "s: show skipped"
    } else {
        "s: hide skipped"
    };
    let mut parts: Vec<(String, usize)> = vec![
        (format!("Refresh: {}s", state.refresh_interval.as_secs()), 4),
        ("up/down: select".to_string(), 1),
        ("enter: open".to_string(), 2),
        ("r: refresh".to_string(), 3),
        (toggle.to_string(), 5),
    ];
    if state.can_go_back {
        parts.push(("esc: back".to_string(), 6));
    }
    parts.push(("q: quit".to_string(), usize::MAX));

    let mut text = join_hints(&parts);
    for rank in 1..=6 {
        if text.chars().count() <= width {
            break;
        }
        parts.retain(|(_, drop_at)| *drop_at != rank);
        text = join_hints(&parts);
    }
    text
}

fn join_hints(parts: &[(String, usize)]) -> String {
    parts
        .iter()
        .map(|(hint, _)| hint.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}
