use crate::projects;

/// In-page anchors on the home route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Projects,
    About,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Projects,
        SectionId::About,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Projects => "projects",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Accepts `#about` and `/#about`.
    pub fn from_anchor(href: &str) -> Option<Self> {
        let id = href.strip_prefix('/').unwrap_or(href).strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home { anchor: Option<SectionId> },
    /// The slug may still be unknown; the detail view renders not-found then.
    Project { slug: String },
    NotFound { path: String },
}

impl Route {
    /// Parse a location path, ignoring any query string; a fragment selects
    /// a home section.
    pub fn parse(location: &str) -> Route {
        let (path, fragment) = match location.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (location, None),
        };
        let path = path.split('?').next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            let anchor = fragment.and_then(|f| {
                SectionId::ALL.into_iter().find(|s| s.id() == f)
            });
            return Route::Home { anchor };
        }
        match trimmed.strip_prefix("/projects/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Project {
                slug: slug.to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home { anchor: None } => "/".to_string(),
            Route::Home { anchor: Some(a) } => format!("/{}", a.anchor()),
            Route::Project { slug } => format!("/projects/{}", slug),
            Route::NotFound { path } => path.clone(),
        }
    }
}

/// Paths pre-rendered at build time: home and every known project.
pub fn static_paths() -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(projects::slugs().map(|s| format!("/projects/{}", s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_routes() {
        assert_eq!(Route::parse("/"), Route::Home { anchor: None });
        assert_eq!(Route::parse(""), Route::Home { anchor: None });
        assert_eq!(
            Route::parse("/#contact"),
            Route::Home {
                anchor: Some(SectionId::Contact)
            }
        );
        assert_eq!(
            Route::parse("/projects/project-two/?ref=x"),
            Route::Project {
                slug: "project-two".into()
            }
        );
        assert!(matches!(Route::parse("/projects/"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("/blog"), Route::NotFound { .. }));
    }

    #[test]
    fn anchors() {
        assert_eq!(SectionId::from_anchor("#skills"), Some(SectionId::Skills));
        assert_eq!(SectionId::from_anchor("/#hero"), Some(SectionId::Hero));
        assert_eq!(SectionId::from_anchor("#nowhere"), None);
        assert_eq!(SectionId::from_anchor("about"), None);
    }

    #[test]
    fn static_paths_cover_projects() {
        let paths = static_paths();
        assert_eq!(paths.len(), 7);
        assert_eq!(paths[1], "/projects/project-one");
    }
}
