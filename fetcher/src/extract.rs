//! Generic "selectors → Listing" extraction for one fetched page.

use crate::sites::SiteSpec;
use common::Listing;
use scraper::{ElementRef, Html, Selector};

/// Extracts every listing card from `html` using the board's selectors.
///
/// Optional fields degrade to `None` individually when their element is
/// missing. A card without a title is dropped: the title is the one
/// required field of a [`Listing`].
pub fn listings(html: &str, spec: &SiteSpec) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let card = Selector::parse(spec.card).unwrap();
    let title = Selector::parse(spec.title).unwrap();
    let company = Selector::parse(spec.company).unwrap();
    let location = Selector::parse(spec.location).unwrap();
    let summary = Selector::parse(spec.summary).unwrap();
    let link = Selector::parse(spec.link).unwrap();

    let mut out = Vec::new();
    for element in document.select(&card) {
        let Some(title) = first_text(&element, &title) else {
            continue;
        };

        let link = element
            .select(&link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| absolutize(spec.base, href));

        out.push(Listing {
            title,
            company: first_text(&element, &company),
            location: first_text(&element, &location),
            summary: first_text(&element, &summary),
            link,
        });
    }
    out
}

/// Text of the first matching descendant, whitespace-collapsed.
fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites;

    const REED_PAGE: &str = r#"
        <html><body>
        <article class="job-result">
            <h3 class="title"><a href="/jobs/12345">Business Development
                Manager</a></h3>
            <a class="gtmu-js-job-result-company">Acme   Ltd</a>
            <li class="location">London</li>
            <div class="description">Drive <b>SaaS</b> growth across EMEA.</div>
        </article>
        <article class="job-result">
            <h3 class="title"><a href="https://example.com/ext">Marketing Exec</a></h3>
        </article>
        <article class="job-result">
            <div class="description">No title on this card.</div>
        </article>
        </body></html>"#;

    #[test]
    fn extracts_full_cards_and_drops_titleless_ones() {
        let rows = listings(REED_PAGE, sites::spec(sites::Site::Reed));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Business Development Manager");
        assert_eq!(rows[0].company.as_deref(), Some("Acme Ltd"));
        assert_eq!(rows[0].location.as_deref(), Some("London"));
        assert_eq!(
            rows[0].summary.as_deref(),
            Some("Drive SaaS growth across EMEA.")
        );
    }

    #[test]
    fn relative_links_get_the_site_base() {
        let rows = listings(REED_PAGE, sites::spec(sites::Site::Reed));
        assert_eq!(
            rows[0].link.as_deref(),
            Some("https://www.reed.co.uk/jobs/12345")
        );
    }

    #[test]
    fn absolute_links_are_kept_verbatim() {
        let rows = listings(REED_PAGE, sites::spec(sites::Site::Reed));
        assert_eq!(rows[1].link.as_deref(), Some("https://example.com/ext"));
    }

    #[test]
    fn missing_elements_degrade_to_none() {
        let rows = listings(REED_PAGE, sites::spec(sites::Site::Reed));
        assert_eq!(rows[1].company, None);
        assert_eq!(rows[1].location, None);
        assert_eq!(rows[1].summary, None);
    }

    #[test]
    fn empty_page_yields_no_listings() {
        let rows = listings("<html><body></body></html>", sites::spec(sites::Site::Reed));
        assert!(rows.is_empty());
    }
}
