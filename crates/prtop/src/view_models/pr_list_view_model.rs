//! PR picker screen

use chrono::{DateTime, Local, Utc};

use super::{retry_hint, ScreenViewModel, ViewLine};
use crate::domain_models::relative_time;
use crate::state::{scroll_window, SessionState};
use crate::theme::Theme;

const FOOTER: &str = "up/down: select | enter: view PR | q: quit";

pub fn build(state: &SessionState, theme: &Theme, now: DateTime<Local>) -> ScreenViewModel {
    let mut body = vec![
        ViewLine::styled("  prtop", theme.header()),
        ViewLine::styled("  Your recent open pull requests", theme.dim()),
        ViewLine::blank(),
    ];

    if let Some(err) = &state.error {
        body.push(ViewLine::styled(format!("Error: {}", err), theme.error()));
        body.push(ViewLine::blank());
        body.push(ViewLine::styled(retry_hint(false), theme.dim()));
        return ScreenViewModel { body, footer: None };
    }

    if state.loading {
        body.push(ViewLine::styled("Fetching your open PRs...", theme.text()));
        return ScreenViewModel { body, footer: None };
    }

    if state.prs.is_empty() {
        body.push(ViewLine::styled("No open PRs found.", theme.text()));
        body.push(ViewLine::blank());
        body.push(ViewLine::styled(retry_hint(false), theme.dim()));
        return ScreenViewModel { body, footer: None };
    }

    let fits = state.visible_prs();
    let first = scroll_window(state.selected, state.scroll_offset, state.prs.len(), fits);
    let now = now.with_timezone(&Utc);

    for (idx, pr) in state.prs.iter().enumerate().skip(first).take(fits) {
        let selected = idx == state.selected;
        let (marker, row_style) = if selected {
            ("▸ ", theme.selected())
        } else {
            ("  ", Default::default())
        };

        body.push(
            ViewLine::styled(marker, theme.repo())
                .span(pr.repo.clone(), theme.repo())
                .span(" ", theme.text())
                .span(format!("#{}", pr.number), theme.pr_number())
                .with_style(row_style),
        );

        let mut details = ViewLine::styled("  ", theme.text()).span(pr.title.clone(), theme.text());
        let updated = relative_time(&pr.updated_at, now);
        if !updated.is_empty() {
            details = details.span(format!("  updated {}", updated), theme.dim());
        }
        body.push(details.with_style(row_style));
        body.push(ViewLine::blank());
    }

    ScreenViewModel {
        body,
        footer: Some(ViewLine::styled(FOOTER, theme.dim())),
    }
}
