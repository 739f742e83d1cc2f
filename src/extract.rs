//! Field extraction from the listing page and article pages.
//!
//! The site's markup has drifted over time, so every lookup here tolerates
//! absence: a missing optional field is signaled, never raised. The image
//! fallback chain (`src` → `data-src` → first `srcset` URL) covers both the
//! plain and the lazy-loading variants of the listing template.

use crate::models::{ArticleDetail, NO_TITLE, RawListEntry};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li.entryList_item").unwrap());
static ITEM_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.entryList_item_link").unwrap());
static ITEM_DATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.entryList_item_date").unwrap());
static ITEM_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.entryList_item_img img").unwrap());
static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());

/// Extract the usable entries from a parsed listing page.
///
/// Containers are taken in document order up to `cap`; the cap counts
/// containers, not surviving entries, so a page full of broken items yields
/// fewer than `cap` results rather than reaching deeper into the page.
pub fn list_entries(document: &Html, cap: usize) -> Vec<RawListEntry> {
    document
        .select(&LIST_ITEM)
        .take(cap)
        .filter_map(list_entry)
        .collect()
}

/// Extract one listing container into a [`RawListEntry`].
///
/// Returns `None` when the link anchor or the date node is missing; callers
/// must not act on a half-filled entry.
pub fn list_entry(item: ElementRef<'_>) -> Option<RawListEntry> {
    let link = item
        .select(&ITEM_LINK)
        .next()?
        .value()
        .attr("href")?
        .trim()
        .to_string();
    let date_text = collected_text(item.select(&ITEM_DATE).next()?);
    let thumb_candidate = item.select(&ITEM_IMAGE).next().and_then(image_candidate);

    Some(RawListEntry {
        link,
        date_text,
        thumb_candidate,
    })
}

/// Extract title and social image from a parsed article page.
///
/// Never fails: a page without an `<h1>` gets the [`NO_TITLE`] placeholder
/// and a missing or empty `og:image` is simply absent.
pub fn article_detail(document: &Html) -> ArticleDetail {
    let title = document
        .select(&HEADLINE)
        .next()
        .map(collected_text)
        .unwrap_or_else(|| NO_TITLE.to_string());

    let social_image = document
        .select(&OG_IMAGE)
        .next()
        .and_then(|meta| non_empty(meta.value().attr("content")));

    ArticleDetail {
        title,
        social_image,
    }
}

/// First usable URL on a listing image node.
///
/// Lazy-loaded variants ship an empty `src`, so empty attributes fall
/// through to the next candidate. For `srcset` only the leading URL token
/// matters; descriptors after it are ignored.
fn image_candidate(img: ElementRef<'_>) -> Option<String> {
    let attrs = img.value();
    non_empty(attrs.attr("src"))
        .or_else(|| non_empty(attrs.attr("data-src")))
        .or_else(|| {
            attrs
                .attr("srcset")
                .and_then(|srcset| srcset.split_whitespace().next())
                .map(str::to_owned)
        })
}

fn collected_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn non_empty(attr: Option<&str>) -> Option<String> {
    attr.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
