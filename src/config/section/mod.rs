//! Configuration section definitions.
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[site]`         | Site identity, social links, search, license     |
//! | `[theme_config]` | Theme toggles (banner, background, footer, ...)  |
//! | `[markdown]`     | Math and code-highlight options                  |
//! | `[publish]`      | Obsidian publishing and git settings             |
//! | `[store]`        | Short-post JSON store                            |
//! | `[build]`        | Local site layout                                |

pub mod markdown;
pub mod publish;
pub mod site;
pub mod theme;

pub use markdown::{CodeHighlightConfig, KatexConfig, MarkdownConfig};
pub use publish::{BuildConfig, PublishConfig, StoreConfig};
pub use site::{
    AuthorConfig, AuthorStatus, EnableFlag, LicenseConfig, LicenseKind, SearchConfig,
    SearchEngine, SiteIdentity, SocialLink,
};
pub use theme::{BackgroundImage, PageLink, ThemeColors, ThemeConfig};
