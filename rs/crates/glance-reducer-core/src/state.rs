use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

const ADMIN_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Posts,
    Page::Categories,
    Page::Users,
    Page::Analytics,
    Page::Settings,
];

const USER_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Posts,
    Page::Search,
    Page::Bookmarks,
    Page::Profile,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Admin => Role::User,
            Role::User => Role::Admin,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Sidebar pages in display order.
    pub fn nav_pages(self) -> &'static [Page] {
        match self {
            Role::Admin => ADMIN_PAGES,
            Role::User => USER_PAGES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("invalid role '{}': expected admin or user", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Active page identifier. Unknown identifiers are kept verbatim in `Other`
/// and rendered as the welcome view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Page {
    Dashboard,
    Posts,
    Categories,
    Users,
    Analytics,
    Settings,
    Search,
    Bookmarks,
    Profile,
    Other(String),
}

impl Page {
    pub fn parse(id: &str) -> Self {
        match id {
            "dashboard" => Page::Dashboard,
            "posts" => Page::Posts,
            "categories" => Page::Categories,
            "users" => Page::Users,
            "analytics" => Page::Analytics,
            "settings" => Page::Settings,
            "search" => Page::Search,
            "bookmarks" => Page::Bookmarks,
            "profile" => Page::Profile,
            other => Page::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Posts => "posts",
            Page::Categories => "categories",
            Page::Users => "users",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
            Page::Search => "search",
            Page::Bookmarks => "bookmarks",
            Page::Profile => "profile",
            Page::Other(s) => s.as_str(),
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Posts => "Posts",
            Page::Categories => "Categories",
            Page::Users => "Users",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
            Page::Search => "Search",
            Page::Bookmarks => "Bookmarks",
            Page::Profile => "Profile",
            Page::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Page {
    fn from(s: String) -> Self {
        Page::parse(&s)
    }
}

impl From<Page> for String {
    fn from(p: Page) -> Self {
        p.id().to_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
}

impl Post {
    pub fn new(id: u64, title: &str, description: &str, likes: u32, comments: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            likes,
            comments,
        }
    }

    /// Placeholder post appended by `add_post`.
    pub fn placeholder(id: u64) -> Self {
        Self::new(
            id,
            &format!("New Post {}", id),
            "Add your post description here...",
            0,
            0,
        )
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Aggregates shown in the admin "Quick Stats" block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub posts: usize,
    pub likes: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub role: Role,
    pub active_page: Page,
    pub posts: Vec<Post>,
    /// Next post identifier. Only ever grows, so ids stay unique after deletes.
    pub next_id: u64,
}

impl ViewState {
    /// Seeded state at mount.
    pub fn new() -> Self {
        Self::with_posts(vec![
            Post::new(
                1,
                "Post Title 1",
                "Short description of the post goes here. This can be an excerpt of the content...",
                15,
                5,
            ),
            Post::new(
                2,
                "Post Title 2",
                "Another short description of a different post goes here...",
                8,
                3,
            ),
        ])
    }

    /// User-mode dashboard over the given posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            role: Role::User,
            active_page: Page::Dashboard,
            posts,
            next_id,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            posts: self.posts.len(),
            likes: self.posts.iter().map(|p| u64::from(p.likes)).sum(),
            comments: self.posts.iter().map(|p| u64::from(p.comments)).sum(),
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
        self.active_page = Page::Dashboard;
    }

    pub fn set_active_page(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Returns the id assigned to the new post.
    pub fn add_post(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.posts.push(Post::placeholder(id));
        id
    }

    /// Returns false when no post matched.
    pub fn delete_post(&mut self, id: u64) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        self.posts.len() != before
    }

    /// Returns false when no post matched.
    pub fn like_post(&mut self, id: u64) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.likes = post.likes.saturating_add(1);
                true
            }
            None => false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_mount_state() {
        let s = ViewState::new();
        assert_eq!(s.role, Role::User);
        assert_eq!(s.active_page, Page::Dashboard);
        assert_eq!(s.posts.len(), 2);
        assert_eq!((s.posts[0].id, s.posts[0].likes, s.posts[0].comments), (1, 15, 5));
        assert_eq!((s.posts[1].id, s.posts[1].likes, s.posts[1].comments), (2, 8, 3));
        assert_eq!(s.next_id, 3);
    }

    #[test]
    fn stats_sum_counters() {
        let s = ViewState::new();
        assert_eq!(s.stats(), Stats { posts: 2, likes: 23, comments: 8 });
        assert_eq!(ViewState::with_posts(vec![]).stats(), Stats::default());
    }

    #[test]
    fn page_ids_roundtrip_and_unknown_kept_verbatim() {
        for role in [Role::Admin, Role::User] {
            for page in role.nav_pages() {
                assert_eq!(&Page::parse(page.id()), page);
            }
        }
        assert_eq!(Page::parse("Dashboard"), Page::Other("Dashboard".into()));
        assert_eq!(Page::parse("nope").id(), "nope");
    }

    #[test]
    fn nav_sets_differ_by_role() {
        let admin: Vec<&str> = Role::Admin.nav_pages().iter().map(|p| p.id()).collect();
        let user: Vec<&str> = Role::User.nav_pages().iter().map(|p| p.id()).collect();
        assert_eq!(admin, ["dashboard", "posts", "categories", "users", "analytics", "settings"]);
        assert_eq!(user, ["dashboard", "posts", "search", "bookmarks", "profile"]);
    }

    #[test]
    fn like_saturates() {
        let mut s = ViewState::with_posts(vec![Post::new(7, "t", "d", u32::MAX, 0)]);
        assert!(s.like_post(7));
        assert_eq!(s.posts[0].likes, u32::MAX);
    }

    #[test]
    fn serde_shape() {
        let s = ViewState::new();
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["role"], "user");
        assert_eq!(v["active_page"], "dashboard");
        assert_eq!(v["next_id"], 3);

        let mut s2 = s.clone();
        s2.set_active_page(Page::parse("elsewhere"));
        let back: ViewState = serde_json::from_str(&serde_json::to_string(&s2).unwrap()).unwrap();
        assert_eq!(back, s2);
    }

    #[test]
    fn role_from_str() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert!("root".parse::<Role>().is_err());
    }
}
