//! Sitemap and schema.org structured data for the public site

use crate::error::{MarketsError, Result};
use crate::filter::MarketListing;
use crate::model::{neighborhood_label, Day, Market, MarketsData};
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Cursor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// How often a page is expected to change
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    /// Value of `<changefreq>`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute page URL
    pub url: String,
    /// `<lastmod>`
    pub last_modified: NaiveDate,
    /// `<changefreq>`
    pub change_frequency: ChangeFrequency,
    /// `<priority>`, 0.0 to 1.0
    pub priority: f32,
}

/// Site pages: home, one per market, one per neighborhood, one per day
#[must_use]
pub fn sitemap_entries(data: &MarketsData, base_url: &str, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let entry = |url: String, change_frequency: ChangeFrequency, priority: f32| SitemapEntry {
        url,
        last_modified,
        change_frequency,
        priority,
    };

    let home = std::iter::once(entry(base.to_string(), ChangeFrequency::Daily, 1.0));
    let markets = data
        .all_slugs()
        .into_iter()
        .map(|slug| entry(market_url(base, slug), ChangeFrequency::Weekly, 0.8));
    let neighborhoods = data
        .neighborhoods()
        .into_iter()
        .map(|n| entry(format!("{base}/barrio/{}", n.slug), ChangeFrequency::Monthly, 0.6));
    let days = Day::ALL
        .into_iter()
        .map(|day| entry(format!("{base}/dia/{}", day.key()), ChangeFrequency::Monthly, 0.6));

    home.chain(markets).chain(neighborhoods).chain(days).collect()
}

/// Render entries as a sitemap.xml document
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])))
        .map_err(render_error)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(render_error)?;
        write_text_element(&mut writer, "loc", &entry.url)?;
        write_text_element(&mut writer, "lastmod", &entry.last_modified.format("%Y-%m-%d").to_string())?;
        write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(render_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(render_error)?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner()).map_err(render_error)?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))
        .map_err(render_error)?;
    Ok(())
}

fn render_error(err: impl std::fmt::Display) -> MarketsError {
    MarketsError::Render(err.to_string())
}

/// Detail page URL for a market
#[must_use]
pub fn market_url(base_url: &str, slug: &str) -> String {
    format!("{}/feria/{slug}", base_url.trim_end_matches('/'))
}

fn description(market: &Market) -> String {
    format!(
        "Mercado callejero en {}, barrio {}, Montevideo.",
        market.location,
        neighborhood_label(&market.neighborhood)
    )
}

fn postal_address(market: &Market) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": market.location,
        "addressLocality": "Montevideo",
        "addressRegion": "Montevideo",
        "addressCountry": "UY"
    })
}

fn geo(market: &Market) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": market.lat,
        "longitude": market.lng
    })
}

fn schema_day(day: Day) -> &'static str {
    match day {
        Day::Monday => "Mo",
        Day::Tuesday => "Tu",
        Day::Wednesday => "We",
        Day::Thursday => "Th",
        Day::Friday => "Fr",
        Day::Saturday => "Sa",
        Day::Sunday => "Su",
    }
}

/// schema.org `openingHours`, listing only the days the market appears on
#[must_use]
pub fn opening_hours(data: &MarketsData, market: &Market) -> String {
    let days: Vec<&str> = data
        .iter()
        .filter(|(_, markets)| markets.iter().any(|m| m.id == market.id))
        .map(|(day, _)| schema_day(day))
        .collect();

    if days.is_empty() {
        market.opening_hours()
    } else {
        format!("{} {}", days.join(","), market.opening_hours())
    }
}

/// `LocalBusiness` object for a market detail page
#[must_use]
pub fn local_business(data: &MarketsData, market: &Market, base_url: &str) -> Value {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": market.name,
        "description": description(market),
        "address": postal_address(market),
        "geo": geo(market),
        "openingHours": opening_hours(data, market),
        "priceRange": "$$",
        "url": market_url(base_url, &market.id),
        "sameAs": market.same_as().collect::<Vec<_>>()
    });

    if let (Some(image), Some(object)) = (&market.image_url, value.as_object_mut()) {
        object.insert("image".to_string(), json!(image));
    }

    value
}

/// `BreadcrumbList` for a market detail page: Inicio › Mercados › market
#[must_use]
pub fn breadcrumbs(market: &Market, base_url: &str) -> Value {
    let base = base_url.trim_end_matches('/');
    let crumbs = [
        ("Inicio", base.to_string()),
        ("Mercados", base.to_string()),
        (market.name.as_str(), market_url(base, &market.id)),
    ];

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": crumbs
            .iter()
            .enumerate()
            .map(|(i, (name, item))| json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item
            }))
            .collect::<Vec<_>>()
    })
}

/// `ItemList` for a listing page (a day, a neighborhood, or the home page)
#[must_use]
pub fn item_list(listings: &[MarketListing<'_>], title: &str, description_text: &str, url: &str, base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": title,
        "description": description_text,
        "url": url,
        "numberOfItems": listings.len(),
        "itemListElement": listings
            .iter()
            .enumerate()
            .map(|(i, listing)| json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "LocalBusiness",
                    "name": listing.market.name,
                    "description": description(listing.market),
                    "address": postal_address(listing.market),
                    "geo": geo(listing.market),
                    "url": market_url(base_url, &listing.market.id),
                    "openingHours": listing.market.opening_hours()
                }
            }))
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_markets, MarketFilter};
    use quick_xml::Reader;

    const BASE: &str = "https://feriasdemontevideo.com";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_sitemap_entries() {
        let data = MarketsData::builtin().unwrap();
        let entries = sitemap_entries(&data, "https://feriasdemontevideo.com/", date());

        assert_eq!(entries[0].url, BASE);
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
        assert!((entries[0].priority - 1.0).abs() < f32::EPSILON);

        let markets = entries.iter().filter(|e| e.url.contains("/feria/")).count();
        let hoods = entries.iter().filter(|e| e.url.contains("/barrio/")).count();
        let days = entries.iter().filter(|e| e.url.contains("/dia/")).count();
        assert_eq!(markets, data.all_slugs().len());
        assert_eq!(hoods, data.neighborhoods().len());
        assert_eq!(days, 7);
        assert_eq!(entries.len(), 1 + markets + hoods + days);
        assert!(entries.iter().any(|e| e.url == format!("{BASE}/feria/mercado-del-puerto")));
    }

    #[test]
    fn test_render_sitemap() {
        let data = MarketsData::builtin().unwrap();
        let entries = sitemap_entries(&data, BASE, date());
        let xml = render_sitemap(&entries).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<lastmod>2024-03-09</lastmod>"));
        assert!(xml.contains("<priority>0.8</priority>"));

        let mut reader = Reader::from_str(&xml);
        let mut urls = 0;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"url" => urls += 1,
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(urls, entries.len());
    }

    #[test]
    fn test_render_escapes() {
        let entries = vec![SitemapEntry {
            url: "https://example.com/?a=1&b=2".to_string(),
            last_modified: date(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.6,
        }];
        let xml = render_sitemap(&entries).unwrap();
        assert!(xml.contains("a=1&amp;b=2"));
    }

    #[test]
    fn test_local_business() {
        let data = MarketsData::builtin().unwrap();
        let puerto = data.find_by_slug("mercado-del-puerto").unwrap().market;
        let value = local_business(&data, puerto, BASE);

        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["url"], format!("{BASE}/feria/mercado-del-puerto"));
        assert_eq!(value["openingHours"], "Mo,Th,Sa,Su 11:00-23:00");
        assert_eq!(
            value["description"],
            "Mercado callejero en Piedras y Maciel, barrio ciudad vieja, Montevideo."
        );
        assert_eq!(value["geo"]["latitude"], -34.9059);
        assert!(value["sameAs"].as_array().unwrap().is_empty());
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_breadcrumbs() {
        let data = MarketsData::builtin().unwrap();
        let market = data.find_by_slug("feria-cordon").unwrap().market;
        let value = breadcrumbs(market, BASE);

        let items = value["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "Inicio");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(items[2]["item"], format!("{BASE}/feria/feria-cordon"));
    }

    #[test]
    fn test_item_list() {
        let data = MarketsData::builtin().unwrap();
        let listings = filter_markets(&data, &MarketFilter::all().with_day(Day::Sunday));
        let value = item_list(&listings, "Ferias del domingo", "Ferias abiertas el domingo", &format!("{BASE}/dia/sunday"), BASE);

        assert_eq!(value["numberOfItems"], 3);
        assert_eq!(value["itemListElement"][0]["item"]["name"], "Feria de Tristán Narvaja");
    }
}
