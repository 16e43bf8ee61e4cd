//! Pagination link model.
//!
//! [`Navigation`] is what a renderer turns into page links. It is rebuilt from the pagination
//! state after every move, so the link states always match the current page.

use crate::config::{TableConfig, UnusedNavs};
use crate::paginator::{PageTarget, PaginationState};

/// Visual state of a pagination link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    /// Clickable.
    #[default]
    Normal,
    /// Link of the current page.
    Active,
    /// Visible but unusable.
    Disabled,
    /// Not shown.
    Hidden,
}

/// A single pagination link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Page move triggered by the link.
    pub target: PageTarget,
    /// Text shown on the link.
    pub label: String,
    /// Visual state.
    pub state: LinkState,
}

/// The full set of pagination links, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    links: Vec<NavLink>,
}

impl Navigation {
    /// Builds the links for `state`.
    ///
    /// Nothing is generated when everything fits on a single page. Otherwise there is one link
    /// per page, wrapped in previous/next links when `next_prev` is on.
    pub fn build(state: &PaginationState, config: &TableConfig) -> Self {
        if state.total_pages <= 1 {
            return Self::default();
        }

        let inactive = match config.unused_navs {
            UnusedNavs::Disable => LinkState::Disabled,
            UnusedNavs::Hide => LinkState::Hidden,
        };

        let mut links = Vec::with_capacity(state.total_pages + 2);

        if config.next_prev {
            links.push(NavLink {
                target: PageTarget::Previous,
                label: config.prev_text.clone(),
                state: if state.is_first_page() {
                    inactive
                } else {
                    LinkState::Normal
                },
            });
        }

        links.extend((1..=state.total_pages).map(|page| NavLink {
            target: PageTarget::Page(page),
            label: page.to_string(),
            state: if page == state.current_page {
                LinkState::Active
            } else {
                LinkState::Normal
            },
        }));

        if config.next_prev {
            links.push(NavLink {
                target: PageTarget::Next,
                label: config.next_text.clone(),
                state: if state.is_last_page() {
                    inactive
                } else {
                    LinkState::Normal
                },
            });
        }

        Self { links }
    }

    /// Links in display order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Returns `true` if there are no links to show.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns `true` if the link for `target` is marked active.
    pub fn is_active(&self, target: PageTarget) -> bool {
        self.links
            .iter()
            .any(|link| link.target == target && link.state == LinkState::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current_page: usize, total_pages: usize) -> PaginationState {
        PaginationState {
            current_page,
            total_pages,
            total_items: total_pages * 10,
            page_size: 10,
        }
    }

    fn states(nav: &Navigation) -> Vec<LinkState> {
        nav.links().iter().map(|link| link.state).collect()
    }

    #[test]
    fn test_single_page_has_no_links() {
        assert!(Navigation::build(&state(1, 1), &TableConfig::default()).is_empty());
        assert!(Navigation::build(&state(1, 0), &TableConfig::default()).is_empty());
    }

    #[test]
    fn test_first_page_disables_previous() {
        let nav = Navigation::build(&state(1, 3), &TableConfig::default());
        let labels: Vec<&str> = nav.links().iter().map(|link| link.label.as_str()).collect();
        assert_eq!(labels, ["‹", "1", "2", "3", "›"]);
        assert_eq!(
            states(&nav),
            [
                LinkState::Disabled,
                LinkState::Active,
                LinkState::Normal,
                LinkState::Normal,
                LinkState::Normal
            ]
        );
        assert!(nav.is_active(PageTarget::Page(1)));
        assert!(!nav.is_active(PageTarget::Page(2)));
    }

    #[test]
    fn test_last_page_hides_next() {
        let config = TableConfig::default().with_unused_navs(UnusedNavs::Hide);
        let nav = Navigation::build(&state(3, 3), &config);
        assert_eq!(
            states(&nav),
            [
                LinkState::Normal,
                LinkState::Normal,
                LinkState::Normal,
                LinkState::Active,
                LinkState::Hidden
            ]
        );
        assert_eq!(nav.links()[4].target, PageTarget::Next);
    }

    #[test]
    fn test_without_next_prev() {
        let config = TableConfig::default().with_next_prev(false);
        let nav = Navigation::build(&state(2, 2), &config);
        assert_eq!(states(&nav), [LinkState::Normal, LinkState::Active]);
        assert_eq!(nav.links()[0].target, PageTarget::Page(1));
    }
}
