//! Embedded files written by `blogkit init`.

mod template;

pub use template::{Template, TemplateVars};

/// Variables for the `blog.toml` template.
pub struct ConfigVars<'a> {
    pub title: &'a str,
}

impl TemplateVars for ConfigVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
            .replace("__TITLE__", &self.title.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Commented starter `blog.toml`.
pub const BLOG_TOML: Template<ConfigVars<'static>> = Template::new(include_str!("blog.toml"));

/// Default `.gitignore` lines for a blog workspace.
pub const GITIGNORE: &str = "node_modules/\ndist/\n.valaxy/\n.DS_Store\n";
