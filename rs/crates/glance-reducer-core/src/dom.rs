use crate::state::{Page, Post, Role, ViewState};
use glance_dom::DomNode;

const BRAND: &str = "GLANCE";
const WELCOME: &str = "Welcome to GLANCE";
const AVATAR_SRC: &str = "/placeholder.svg?height=32&width=32";
const FOOTER: &str = "\u{a9} 2024 GLANCE. All rights reserved.";

/// Heading of the content panel for the current role/page pair.
/// Pages outside the role's sidebar set fall back to the welcome heading.
pub fn heading(role: Role, page: &Page) -> &'static str {
    match (role, page) {
        (_, Page::Dashboard) => "Dashboard Overview",
        (_, Page::Posts) => "Manage Posts",
        (Role::Admin, Page::Categories) => "Manage Categories",
        (Role::Admin, Page::Users) => "Manage Users",
        (Role::Admin, Page::Analytics) => "Analytics Dashboard",
        (Role::Admin, Page::Settings) => "Settings",
        (Role::User, Page::Search) => "Search Content",
        (Role::User, Page::Bookmarks) => "Your Bookmarks",
        (Role::User, Page::Profile) => "Your Profile",
        _ => WELCOME,
    }
}

/// Build the whole view tree for `state`.
pub fn render_view(state: &ViewState) -> DomNode {
    let title = match heading(state.role, &state.active_page) {
        WELCOME => BRAND.to_string(),
        h => format!("{} \u{b7} {}", BRAND, h),
    };

    DomNode::element("div")
        .with_key("app")
        .with_class("glance")
        .with_attr("data-role", state.role.as_str())
        .with_children([
            DomNode::head(vec![DomNode::text("title", &title)]),
            topbar(state.role),
            DomNode::element("div")
                .with_class("layout")
                .with_children([sidebar(state), main_panel(state)]),
            DomNode::element("footer")
                .with_key("footer")
                .with_child(DomNode::text("p", FOOTER).with_class("copyright")),
        ])
}

fn topbar(role: Role) -> DomNode {
    let toggle_label = if role.is_admin() { "Switch to User Mode" } else { "Switch to Admin Mode" };

    DomNode::element("nav")
        .with_key("topbar")
        .with_class("topbar")
        .with_children([
            DomNode::text("span", BRAND).with_class("brand"),
            DomNode::element("div").with_class("topbar-actions").with_children([
                DomNode::element("button")
                    .with_key("role-toggle")
                    .with_class("role-toggle")
                    .on("click", "toggle_role")
                    .with_text(toggle_label),
                DomNode::element("button").with_class("avatar").with_child(
                    DomNode::element("img")
                        .with_attr("src", AVATAR_SRC)
                        .with_attr("alt", "User avatar"),
                ),
            ]),
        ])
}

fn sidebar(state: &ViewState) -> DomNode {
    let links = state.role.nav_pages().iter().map(|page| {
        let class = if *page == state.active_page { "nav-link active" } else { "nav-link" };
        DomNode::element("a")
            .with_key(format!("nav-{}", page.id()))
            .with_attr("href", "#")
            .with_class(class)
            .on("click", format!("set_page:{}", page.id()))
            .with_text(page.label())
    });

    DomNode::element("aside").with_class("sidebar").with_child(
        DomNode::element("nav")
            .with_key("nav")
            .with_children(links),
    )
}

fn main_panel(state: &ViewState) -> DomNode {
    DomNode::element("main")
        .with_key("content")
        .with_class("content")
        .with_child(
            DomNode::element("div")
                .with_class("container")
                .with_children(page_content(state)),
        )
}

fn page_content(state: &ViewState) -> Vec<DomNode> {
    let h = heading(state.role, &state.active_page);
    let mut out = vec![DomNode::text("h2", h).with_key("page-heading")];

    match (state.role, &state.active_page) {
        (role, Page::Dashboard) => {
            if role.is_admin() {
                out.push(stats_block(state));
            }
            out.push(post_card(state));
        }
        (role, Page::Posts) => {
            if role.is_admin() {
                out.push(
                    DomNode::element("button")
                        .with_key("add-post")
                        .with_class("add-post")
                        .on("click", "add_post")
                        .with_text("Add New Post"),
                );
            }
            out.push(post_card(state));
        }
        (Role::User, Page::Search) => {
            out.push(
                DomNode::element("div").with_class("search").with_child(
                    DomNode::element("input")
                        .with_key("search-input")
                        .with_attr("type", "text")
                        .with_attr("placeholder", "Search posts..."),
                ),
            );
        }
        // Headings only
        _ => {}
    }
    out
}

fn stats_block(state: &ViewState) -> DomNode {
    let stats = state.stats();
    let stat = |key: &str, label: &str, value: String| {
        DomNode::element("div")
            .with_key(format!("stat-{}", key))
            .with_class("stat")
            .with_children([
                DomNode::text("h4", label),
                DomNode::text("p", &value).with_class("stat-value"),
            ])
    };

    DomNode::element("div")
        .with_key("stats")
        .with_class("card stats")
        .with_children([
            DomNode::text("h3", "Quick Stats"),
            DomNode::element("div").with_class("stat-grid").with_children([
                stat("posts", "Total Posts", stats.posts.to_string()),
                stat("likes", "Total Likes", stats.likes.to_string()),
                stat("comments", "Total Comments", stats.comments.to_string()),
            ]),
        ])
}

fn post_card(state: &ViewState) -> DomNode {
    let rows = state.posts.iter().map(|p| post_row(p, state.role));
    DomNode::element("div").with_class("card").with_child(
        DomNode::element("ul")
            .with_key("posts")
            .with_class("post-list")
            .with_children(rows),
    )
}

fn post_row(post: &Post, role: Role) -> DomNode {
    DomNode::element("li")
        .with_key(format!("post-{}", post.id))
        .with_class("post")
        .with_children([
            DomNode::element("div").with_class("post-header").with_children([
                DomNode::text("h3", &post.title),
                DomNode::element("div")
                    .with_class("post-actions")
                    .with_children(post_actions(post, role)),
            ]),
            DomNode::text("p", &post.description).with_class("post-description"),
        ])
}

fn post_actions(post: &Post, role: Role) -> Vec<DomNode> {
    match role {
        Role::Admin => vec![
            // Edit has no backing action
            DomNode::element("button")
                .with_key(format!("edit-{}", post.id))
                .with_class("edit-btn")
                .with_attr("title", "Edit")
                .with_text("Edit"),
            DomNode::element("button")
                .with_key(format!("delete-{}", post.id))
                .with_class("delete-btn")
                .with_attr("title", "Delete")
                .on("click", format!("delete_post:{}", post.id))
                .with_text("Delete"),
        ],
        Role::User => vec![
            DomNode::element("button")
                .with_key(format!("like-{}", post.id))
                .with_class("like-btn")
                .on("click", format!("like_post:{}", post.id))
                .with_text(post.likes.to_string()),
            DomNode::element("span")
                .with_key(format!("comments-{}", post.id))
                .with_class("comment-count")
                .with_text(post.comments.to_string()),
        ],
    }
}
