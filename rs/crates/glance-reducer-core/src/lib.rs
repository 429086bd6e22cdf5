//! glance-reducer-core — view state, reducer and renderer for the GLANCE dashboard
//!
//! Data flows one way: an intent is parsed into an [`Action`], [`reduce`]
//! produces the next [`ViewState`], and [`render`] turns that state into a
//! [`Snapshot`] the host applies.

mod dom;
mod parse;
mod state;

pub use dom::{heading, render_view};
pub use glance_dom::{parse_snapshot, DomNode, Snapshot};
pub use glance_render_html::PageOptions;
pub use parse::{parse_action, ActionError};
pub use state::{Page, Post, Role, Stats, ViewState};

use tracing::{debug, warn};

/// Supported actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleRole,
    SetActivePage(Page),
    AddPost,
    DeletePost(u64),
    LikePost(u64),
}

/// Pure reducer: consume the current state and return the next one.
/// Every action is total; unknown post ids leave the collection untouched.
pub fn reduce(mut state: ViewState, action: &Action) -> ViewState {
    match action {
        Action::ToggleRole => {
            state.toggle_role();
            debug!(role = %state.role, "role toggled");
        }
        Action::SetActivePage(page) => {
            state.set_active_page(page.clone());
            debug!(page = %page, "active page set");
        }
        Action::AddPost => {
            let id = state.add_post();
            debug!(id, total = state.posts.len(), "post added");
        }
        Action::DeletePost(id) => {
            if state.delete_post(*id) {
                debug!(id, total = state.posts.len(), "post deleted");
            } else {
                debug!(id, "delete_post: no such post");
            }
        }
        Action::LikePost(id) => {
            if state.like_post(*id) {
                debug!(id, "post liked");
            } else {
                debug!(id, "like_post: no such post");
            }
        }
    }
    state
}

/// Render the current state to a JSON-serialisable DOM snapshot.
pub fn render(state: &ViewState) -> Snapshot {
    Snapshot::new(render_view(state))
}

/// Render the current state as an HTML fragment for first paint.
pub fn render_html(state: &ViewState) -> String {
    glance_render_html::render_to_html(&render_view(state))
}

/// Render the current state as a complete HTML document.
pub fn render_page(state: &ViewState, mut opts: PageOptions) -> String {
    opts.root = render_view(state);
    glance_render_html::render_page(&opts)
}

/// Parse an action, reduce, and render the resulting snapshot.
/// Input that fails to parse leaves the state unchanged.
pub fn process(state: ViewState, input: &str) -> (ViewState, Snapshot) {
    let next = match parse_action(input) {
        Ok(action) => reduce(state, &action),
        Err(e) => {
            warn!(error = %e, input = input.trim(), "ignoring action");
            state
        }
    };
    let snapshot = render(&next);
    (next, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likes(s: &ViewState) -> Vec<u32> {
        s.posts.iter().map(|p| p.likes).collect()
    }

    fn ids(s: &ViewState) -> Vec<u64> {
        s.posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn toggle_role_always_resets_to_dashboard() {
        for role in [Role::Admin, Role::User] {
            for page in ["posts", "settings", "search", "bogus", "dashboard"] {
                let mut s = ViewState::new();
                s.role = role;
                s.active_page = Page::parse(page);
                let next = reduce(s, &Action::ToggleRole);
                assert_eq!(next.role, role.toggled());
                assert_eq!(next.active_page, Page::Dashboard);
            }
        }
    }

    #[test]
    fn set_active_page_is_verbatim() {
        let s = reduce(ViewState::new(), &Action::SetActivePage(Page::parse("reports")));
        assert_eq!(s.active_page.id(), "reports");
        assert_eq!(s.role, Role::User);
    }

    #[test]
    fn like_existing_changes_only_that_post() {
        let before = ViewState::new();
        let after = reduce(before.clone(), &Action::LikePost(2));
        assert_eq!(after.posts[1].likes, before.posts[1].likes + 1);
        assert_eq!(after.posts[0], before.posts[0]);
        assert_eq!(
            (&after.posts[1].title, after.posts[1].comments),
            (&before.posts[1].title, before.posts[1].comments)
        );
        assert_eq!(after.posts.len(), before.posts.len());
    }

    #[test]
    fn like_or_delete_missing_is_noop() {
        let before = ViewState::new();
        assert_eq!(reduce(before.clone(), &Action::LikePost(99)), before);
        assert_eq!(reduce(before.clone(), &Action::DeletePost(99)), before);
    }

    #[test]
    fn delete_existing_removes_exactly_one() {
        let before = ViewState::new();
        let after = reduce(before.clone(), &Action::DeletePost(1));
        assert_eq!(after.posts.len(), before.posts.len() - 1);
        assert_eq!(ids(&after), vec![2]);
        assert_eq!(after.posts[0], before.posts[1]);
    }

    #[test]
    fn add_post_appends_zeroed_post() {
        let before = ViewState::new();
        let after = reduce(before.clone(), &Action::AddPost);
        assert_eq!(after.posts.len(), before.posts.len() + 1);
        let new = after.posts.last().unwrap();
        assert_eq!((new.likes, new.comments), (0, 0));
        assert_eq!(new.id, 3);
        assert_eq!(new.title, "New Post 3");
        assert_eq!(new.description, "Add your post description here...");
    }

    #[test]
    fn like_delete_add_scenario() {
        let mut s = ViewState::new();
        assert_eq!(likes(&s), vec![15, 8]);

        s = reduce(s, &Action::LikePost(1));
        assert_eq!(likes(&s), vec![16, 8]);

        s = reduce(s, &Action::DeletePost(2));
        assert_eq!(ids(&s), vec![1]);
        assert_eq!(likes(&s), vec![16]);

        s = reduce(s, &Action::AddPost);
        assert_eq!(s.posts.len(), 2);
        assert_eq!(s.posts[1].likes, 0);
        // Fresh id, not the length-derived 2 that was just deleted
        assert_eq!(ids(&s), vec![1, 3]);
    }

    #[test]
    fn ids_never_collide_after_delete_then_add() {
        let mut s = ViewState::new();
        s = reduce(s, &Action::DeletePost(1));
        s = reduce(s, &Action::AddPost);
        s = reduce(s, &Action::AddPost);
        let mut seen = ids(&s);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), s.posts.len());
        assert_eq!(ids(&s), vec![2, 3, 4]);
    }

    #[test]
    fn user_on_settings_renders_welcome() {
        let s = reduce(ViewState::new(), &Action::SetActivePage(Page::Settings));
        let html = render_html(&s);
        assert!(html.contains("<h2 data-key=\"page-heading\">Welcome to GLANCE</h2>"));
    }

    #[test]
    fn process_applies_tokens_and_ignores_garbage() {
        let (s, snap) = process(ViewState::new(), "like_post:1");
        assert_eq!(likes(&s), vec![16, 8]);
        assert_eq!(snap.root.find_key("like-1").unwrap().text.as_deref(), Some("16"));

        let (s2, snap2) = process(s.clone(), "{broken");
        assert_eq!(s2, s);
        assert_eq!(snap2, snap);
    }

    #[test]
    fn event_tokens_in_view_drive_the_reducer() {
        // Every action bound in the rendered tree parses back to an action.
        for role in [Role::Admin, Role::User] {
            let mut s = ViewState::new();
            s.role = role;
            for page in role.nav_pages() {
                s.active_page = page.clone();
                for token in render_view(&s).actions() {
                    assert!(parse_action(token).is_ok(), "unparseable token {token}");
                }
            }
        }

        let admin = reduce(ViewState::new(), &Action::ToggleRole);
        let token = render_view(&admin)
            .find_key("delete-2")
            .and_then(|n| n.event("click"))
            .unwrap()
            .to_string();
        let (after, _) = process(admin, &token);
        assert_eq!(ids(&after), vec![1]);
    }

    #[test]
    fn render_page_wraps_view() {
        let mut opts = PageOptions::new(DomNode::element("div"));
        opts.styles.push("/glance.css".into());
        let page = render_page(&ViewState::new(), opts);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>GLANCE \u{b7} Dashboard Overview</title>"));
        assert!(page.contains("Switch to Admin Mode"));
    }
}
