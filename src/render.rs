//! HTML rendering
//!
//! Every page is assembled by substituting record fields into fixed
//! skeletons. Rendering is a pure string transform; all file writes happen
//! in [`crate::Site`].

use crate::config::SiteConfig;
use crate::record::{Link, PageGroup, PageRecord};

/// Shared navigation block, identical on every page. The leading blank
/// line separates it from the menu button in the rendered header.
const NAV: &str = r#"
        <nav class="nav" data-nav>
          <a href="index.html">Home</a>
          <a href="about.html">About</a>
          <a href="skills-honors.html">Skills &amp; Honors</a>
          <a href="publications.html">Publications</a>
          <a href="projects/index.html">Projects</a>
          <a href="activities.html">Activities</a>
          <a href="contact.html">Contact</a>
        </nav>"#;

/// Escape a value for use inside a double-quoted attribute.
///
/// Only double quotes are rewritten; every other field is trusted literal
/// input authored alongside the templates.
pub fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Format plain entries as `<li>` fragments, one per line, preserving order.
pub fn list_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("        <li>{item}</li>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format links as anchor fragments, one per line, preserving order.
///
/// External links open in a new tab. An empty list renders a single
/// placeholder fragment instead of an empty section.
pub fn link_items(links: &[Link]) -> String {
    if links.is_empty() {
        return r#"          <li><span class="small">Add links here.</span></li>"#.to_string();
    }

    links
        .iter()
        .map(|link| {
            let attrs = if link.is_external() {
                r#" target="_blank" rel="noopener""#
            } else {
                ""
            };
            format!(
                r#"          <li><a href="{href}"{attrs}>{label}</a></li>"#,
                href = link.href,
                label = link.label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the shared site header, parameterized by site identity.
pub fn header(site: &SiteConfig) -> String {
    format!(
        r#"  <header class="site-header">
    <div class="header-inner">
      <h1 class="site-title">{title}</h1>
      <p class="site-tagline">{tagline}</p>
    </div>
    <div class="nav-wrap">
      <div class="nav-inner">
        <button class="nav-toggle" type="button" aria-expanded="false" data-nav-toggle>
          <span aria-hidden="true">☰</span>
          Menu
        </button>
{NAV}
      </div>
    </div>
  </header>
"#,
        title = site.title,
        tagline = site.tagline,
    )
}

/// Render the site footer with the group's back link.
///
/// The copyright year is filled in client-side so regeneration stays
/// byte-identical across runs.
pub fn footer(site: &SiteConfig, group: &PageGroup) -> String {
    format!(
        r#"  <footer class="site-footer">
    <div class="footer-inner">
      <div>© <span id="y"></span> {owner}</div>
      <div><a href="{back_href}">{back_label}</a></div>
    </div>
  </footer>

  <script src="assets/js/main.js"></script>
  <script>
    document.getElementById('y').textContent = new Date().getFullYear();
  </script>
"#,
        owner = site.title,
        back_href = group.back_href,
        back_label = group.back_label,
    )
}

/// Render one complete page document.
pub fn page(record: &PageRecord, group: &PageGroup, header: &str, footer: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <meta name="description" content="{description}" />
  <link rel="stylesheet" href="assets/css/style.css" />
</head>
<body>
{header}

  <main class="main">
    <p class="kicker"><a href="{root_href}">{root_label}</a> / {crumb}</p>
    <h2 class="page-title">{heading}</h2>

    <img class="hero-img" src="assets/img/placeholder-wide.svg" alt="Project placeholder image" />

    <div class="callout">
      <p class="kicker">Summary</p>
      <p>{summary}</p>
      <p>{badges}</p>
    </div>

    <section class="section">
      <h2>Overview</h2>
      <p>{overview}</p>
    </section>

    <section class="section">
      <h2>My role</h2>
      <p>{role}</p>
    </section>

    <section class="section">
      <h2>Tools</h2>
      <ul>
{tools}
      </ul>
    </section>

    <section class="section">
      <h2>Outcomes</h2>
      <ul>
{outcomes}
      </ul>
    </section>

    <section class="section">
      <h2>Links</h2>
      <div class="card">
        <p class="small">Add links to a paper, demo video, repository, or slide deck.</p>
        <ul>
{links}
        </ul>
      </div>
    </section>
  </main>

{footer}
</body>
</html>
"#,
        title = record.title,
        description = escape_attr(record.description),
        header = header,
        root_href = group.crumb_href,
        root_label = group.crumb_label,
        crumb = record.crumb,
        heading = record.heading,
        summary = record.summary,
        badges = record.badges,
        overview = record.overview,
        role = record.role,
        tools = list_items(record.tools),
        outcomes = list_items(record.outcomes),
        links = link_items(record.links),
        footer = footer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: PageGroup = PageGroup {
        name: "project",
        crumb_label: "Projects",
        crumb_href: "projects/index.html",
        back_label: "Back to Projects",
        back_href: "projects/index.html",
        records: &[],
    };

    const RECORD: PageRecord = PageRecord {
        file: "sample.html",
        title: "Sample Project | Site",
        description: "A sample \"quoted\" description.",
        crumb: "Sample crumb",
        heading: "Sample heading",
        summary: "Sample summary.",
        badges: "<span class=\"badge\">VR</span>",
        overview: "Sample overview.",
        role: "Sample role.",
        tools: &["Unity", "C#"],
        outcomes: &["First outcome", "Second outcome"],
        links: &[
            Link {
                label: "Paper",
                href: "https://doi.org/10.1000/x",
            },
            Link {
                label: "Portfolio entry",
                href: "portfolio.html",
            },
        ],
    };

    fn render_sample() -> String {
        let site = SiteConfig::default();
        let header = header(&site);
        let footer = footer(&site, &GROUP);
        page(&RECORD, &GROUP, &header, &footer)
    }

    #[test]
    fn test_list_items_preserve_count_and_order() {
        let html = list_items(&["Unity", "C#"]);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines, ["        <li>Unity</li>", "        <li>C#</li>"]);
    }

    #[test]
    fn test_list_items_empty_is_empty() {
        assert_eq!(list_items(&[]), "");
    }

    #[test]
    fn test_external_link_opens_in_new_tab() {
        let html = link_items(&[Link {
            label: "Paper",
            href: "https://doi.org/10.1000/x",
        }]);
        assert_eq!(
            html,
            r#"          <li><a href="https://doi.org/10.1000/x" target="_blank" rel="noopener">Paper</a></li>"#
        );
    }

    #[test]
    fn test_internal_link_has_no_new_tab_attrs() {
        for href in ["portfolio.html", "#"] {
            let html = link_items(&[Link {
                label: "Entry",
                href,
            }]);
            assert!(!html.contains("target="), "unexpected target attr: {html}");
            assert!(!html.contains("rel="), "unexpected rel attr: {html}");
        }
    }

    #[test]
    fn test_empty_links_render_placeholder_only() {
        let html = link_items(&[]);
        assert_eq!(
            html,
            r#"          <li><span class="small">Add links here.</span></li>"#
        );
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_escape_attr_rewrites_double_quotes() {
        assert_eq!(escape_attr(r#"a "b" c"#), "a &quot;b&quot; c");
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    fn test_page_places_each_field_exactly_once() {
        let html = render_sample();

        let expectations = [
            "<title>Sample Project | Site</title>",
            r#"<meta name="description" content="A sample &quot;quoted&quot; description." />"#,
            r#"<a href="projects/index.html">Projects</a> / Sample crumb"#,
            r#"<h2 class="page-title">Sample heading</h2>"#,
            "<p>Sample summary.</p>",
            "<p><span class=\"badge\">VR</span></p>",
            "<p>Sample overview.</p>",
            "<p>Sample role.</p>",
        ];
        for expected in expectations {
            assert_eq!(
                html.matches(expected).count(),
                1,
                "expected exactly one `{expected}`"
            );
        }
    }

    #[test]
    fn test_page_tools_section_lists_exactly_the_tools() {
        let html = render_sample();
        let tools_section = html
            .split("<h2>Tools</h2>")
            .nth(1)
            .and_then(|rest| rest.split("</section>").next())
            .expect("tools section present");

        assert_eq!(tools_section.matches("<li>").count(), 2);
        let unity = tools_section.find("<li>Unity</li>").expect("Unity item");
        let csharp = tools_section.find("<li>C#</li>").expect("C# item");
        assert!(unity < csharp, "tools out of order");
    }

    #[test]
    fn test_page_escapes_description_but_not_title() {
        let site = SiteConfig::default();
        let mut record = RECORD;
        record.title = r#"Quoted "Title""#;
        let html = page(&record, &GROUP, &header(&site), &footer(&site, &GROUP));

        assert!(html.contains(r#"<title>Quoted "Title"</title>"#));
        assert!(html.contains("A sample &quot;quoted&quot; description."));
    }

    #[test]
    fn test_header_carries_site_identity_and_nav() {
        let site = SiteConfig {
            title: "Jane Doe".to_string(),
            tagline: "Researcher".to_string(),
        };
        let html = header(&site);
        assert!(html.contains(r#"<h1 class="site-title">Jane Doe</h1>"#));
        assert!(html.contains(r#"<p class="site-tagline">Researcher</p>"#));
        assert!(html.contains(r#"<nav class="nav" data-nav>"#));
    }

    #[test]
    fn test_footer_links_back_to_group_index() {
        let site = SiteConfig::default();
        let html = footer(&site, &GROUP);
        assert!(html.contains(r#"<a href="projects/index.html">Back to Projects</a>"#));
        assert!(html.contains("new Date().getFullYear()"));
    }
}
