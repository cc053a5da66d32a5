//! Ad board map export.
//!
//! Turns active ad boards into plain marker records for the client-side map
//! and serializes them so the result can be dropped straight into a
//! `<script>` element.

use serde::Serialize;

use crate::ad_board::ad_type_label;
use crate::media::optional_public_url;
use crate::types::DbId;

/// Initial map centre latitude.
pub const MAP_CENTER_LAT: f64 = 53.00;

/// Initial map centre longitude.
pub const MAP_CENTER_LON: f64 = 78.65;

/// Title of the rental map page.
pub const MAP_PAGE_TITLE: &str = "Аренда рекламных носителей в Славгороде";

/// Map centre coordinate passed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

impl Default for MapCenter {
    fn default() -> Self {
        Self {
            lat: MAP_CENTER_LAT,
            lon: MAP_CENTER_LON,
        }
    }
}

/// One marker on the rental map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: DbId,
    pub title: String,
    pub ad_type: String,
    pub ad_type_display: String,
    pub address: String,
    pub description: String,
    pub rental_terms: String,
    pub price: Option<f64>,
    pub contact_info: String,
    pub photo: String,
    pub lat: f64,
    pub lon: f64,
}

/// The ad board attributes the exporter reads.
pub trait MapBoard {
    fn id(&self) -> DbId;
    fn title(&self) -> &str;
    fn ad_type(&self) -> &str;
    fn address(&self) -> &str;
    fn description(&self) -> &str;
    fn rental_terms(&self) -> &str;
    fn price(&self) -> Option<f64>;
    fn contact_info(&self) -> &str;
    fn photo(&self) -> Option<&str>;
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
    fn is_active(&self) -> bool;
}

impl MapMarker {
    /// Build a marker, resolving the photo to a public URL.
    pub fn from_board<B: MapBoard>(board: &B, media_base: &str) -> Self {
        Self {
            id: board.id(),
            title: board.title().to_string(),
            ad_type: board.ad_type().to_string(),
            ad_type_display: ad_type_label(board.ad_type()).to_string(),
            address: board.address().to_string(),
            description: board.description().to_string(),
            rental_terms: board.rental_terms().to_string(),
            price: board.price(),
            contact_info: board.contact_info().to_string(),
            photo: optional_public_url(media_base, board.photo()),
            lat: board.lat(),
            lon: board.lon(),
        }
    }
}

/// Markers for every active board, in input order.
pub fn export_markers<B: MapBoard>(boards: &[B], media_base: &str) -> Vec<MapMarker> {
    boards
        .iter()
        .filter(|b| b.is_active())
        .map(|b| MapMarker::from_board(b, media_base))
        .collect()
}

/// Serialize a value as JSON that is safe to inline inside `<script>`.
///
/// serde_json already escapes control characters and leaves non-ASCII text
/// as UTF-8. On top of that `<`, `>` and `&` become `\u003c`, `\u003e` and
/// `\u0026` so the payload cannot close the script element, and U+2028 /
/// U+2029 are escaped for pre-ES2019 parsers. Every replaced character only
/// ever occurs inside JSON strings, so the result parses to the same value.
pub fn to_script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let raw = serde_json::to_string(value)?;
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Board {
        id: DbId,
        title: String,
        price: Option<f64>,
        photo: Option<String>,
        is_active: bool,
    }

    impl MapBoard for Board {
        fn id(&self) -> DbId {
            self.id
        }
        fn title(&self) -> &str {
            &self.title
        }
        fn ad_type(&self) -> &str {
            "billboard"
        }
        fn address(&self) -> &str {
            "ул. Ленина, 1"
        }
        fn description(&self) -> &str {
            ""
        }
        fn rental_terms(&self) -> &str {
            "от месяца"
        }
        fn price(&self) -> Option<f64> {
            self.price
        }
        fn contact_info(&self) -> &str {
            ""
        }
        fn photo(&self) -> Option<&str> {
            self.photo.as_deref()
        }
        fn lat(&self) -> f64 {
            52.9994
        }
        fn lon(&self) -> f64 {
            78.6459
        }
        fn is_active(&self) -> bool {
            self.is_active
        }
    }

    fn board(id: DbId, is_active: bool, price: Option<f64>) -> Board {
        Board {
            id,
            title: format!("Щит {id}"),
            price,
            photo: None,
            is_active,
        }
    }

    #[test]
    fn only_active_boards_are_exported() {
        let boards = vec![board(1, true, None), board(2, false, Some(10.5))];
        let markers = export_markers(&boards, "/media/");

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, 1);
        assert_eq!(markers[0].price, None);

        let json: serde_json::Value =
            serde_json::from_str(&to_script_json(&markers).unwrap()).unwrap();
        assert!(json[0]["price"].is_null());
    }

    #[test]
    fn marker_carries_label_and_photo_url() {
        let mut b = board(7, true, Some(12000.0));
        b.photo = Some("adboards/7.jpg".into());
        let marker = MapMarker::from_board(&b, "/media/");

        assert_eq!(marker.ad_type, "billboard");
        assert_eq!(marker.ad_type_display, "Билборд");
        assert_eq!(marker.photo, "/media/adboards/7.jpg");
        assert_eq!(marker.price, Some(12000.0));
    }

    #[test]
    fn missing_photo_is_empty_string() {
        let marker = MapMarker::from_board(&board(3, true, None), "/media/");
        assert_eq!(marker.photo, "");
    }

    #[test]
    fn script_json_preserves_non_ascii() {
        let out = to_script_json(&vec!["Ситилайт"]).unwrap();
        assert_eq!(out, "[\"Ситилайт\"]");
    }

    #[test]
    fn script_json_escapes_markup_and_control_characters() {
        let out = to_script_json(&"</script><b>&\n\u{2028}").unwrap();
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('&'));
        assert!(!out.contains('\n'));
        assert!(!out.contains('\u{2028}'));

        let back: String = serde_json::from_str(&out).unwrap();
        assert_eq!(back, "</script><b>&\n\u{2028}");
    }

    #[test]
    fn map_center_defaults() {
        let center = MapCenter::default();
        assert_eq!(center.lat, 53.00);
        assert_eq!(center.lon, 78.65);
    }
}
