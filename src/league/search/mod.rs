//! Free-text and date-range filtering over in-memory collections.
//!
//! A record is kept when it passes both criteria:
//!
//! - **text**: any search field contains the query, case-insensitively
//!   (vacuous when the query is empty);
//! - **date**: any date field falls inside the inclusive range
//!   (vacuous when there are no date fields or the range is unbounded).
//!
//! Output keeps the input order. Nothing here fails: a missing or malformed
//! field simply does not match.

mod date;
mod text;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::model::{DateRange, Fields, FilterConfig, FilterQuery};

/// Returns the records matching `query`, in input order.
///
/// # Examples
///
/// ```
/// use league_core::{filter, FilterConfig, FilterQuery, Record};
///
/// let clubs = vec![
///     Record::new().with("name", "FC Nouakchott").with("city", "Nouakchott"),
///     Record::new().with("name", "AS Garde").with("city", "Kaédi"),
/// ];
/// let config = FilterConfig::text(["name", "city"]);
///
/// let found = filter(&clubs, &config, &FilterQuery::text("kaédi"));
/// assert_eq!(found, vec![&clubs[1]]);
/// ```
#[instrument(level = "debug", skip(records, config), fields(total = records.len()))]
pub fn filter<'a, T: Fields>(
    records: &'a [T],
    config: &FilterConfig,
    query: &FilterQuery,
) -> Vec<&'a T> {
    if query.is_noop() {
        return records.iter().collect();
    }
    let matcher = Matcher::new(config, query);
    let found: Vec<&T> = records.iter().filter(|r| matcher.is_match(*r)).collect();
    debug!(count = found.len(), "filtered records");
    found
}

/// Same as [`filter`], returning owned records.
pub fn filter_cloned<T: Fields + Clone>(
    records: &[T],
    config: &FilterConfig,
    query: &FilterQuery,
) -> Vec<T> {
    filter(records, config, query).into_iter().cloned().collect()
}

/// Number of records [`filter`] would return.
pub fn count<T: Fields>(records: &[T], config: &FilterConfig, query: &FilterQuery) -> usize {
    if query.is_noop() {
        return records.len();
    }
    let matcher = Matcher::new(config, query);
    records.iter().filter(|r| matcher.is_match(*r)).count()
}

/// A query prepared against a field configuration.
pub struct Matcher<'q> {
    search_fields: &'q [String],
    date_fields: &'q [String],
    needle: Option<String>,
    range: DateRange,
}

impl<'q> Matcher<'q> {
    pub fn new(config: &'q FilterConfig, query: &FilterQuery) -> Self {
        Self {
            search_fields: &config.search_fields,
            date_fields: &config.date_fields,
            needle: query.needle().map(str::to_lowercase),
            range: query.range,
        }
    }

    pub fn is_match<T: Fields>(&self, record: &T) -> bool {
        self.matches_text(record) && self.matches_date(record)
    }

    fn matches_text<T: Fields>(&self, record: &T) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        self.search_fields
            .iter()
            .any(|field| text::contains_text(record.field(field), needle))
    }

    fn matches_date<T: Fields>(&self, record: &T) -> bool {
        if self.date_fields.is_empty() || self.range.is_unbounded() {
            return true;
        }
        self.date_fields
            .iter()
            .filter_map(|field| date::parse_date(record.field(field)))
            .any(|date: NaiveDate| self.range.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{FieldValue, Record};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clubs() -> Vec<Record> {
        vec![
            Record::new()
                .with("name", "FC Nouakchott")
                .with("city", "Nouakchott"),
            Record::new().with("name", "AS Garde").with("city", "Kaédi"),
        ]
    }

    fn news() -> Vec<Record> {
        vec![
            Record::new()
                .with("title", "Cup draw announced")
                .with("published_at", "2024-03-01T09:00:00+00:00"),
            Record::new()
                .with("title", "Quarter-final report")
                .with("published_at", "2024-03-15"),
            Record::new()
                .with("title", "Cup final preview")
                .with("published_at", "2024-03-31 20:00:00"),
            Record::new()
                .with("title", "Season kickoff")
                .with("published_at", "not a date"),
            Record::new().with("title", "Cup stadium works"),
        ]
    }

    fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records
            .iter()
            .filter_map(|r| r.get("title").and_then(|t| t.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = news();
        let found = filter(&records, &FilterConfig::news(), &FilterQuery::default());
        assert_eq!(found, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_kaedi_scenario() {
        let records = clubs();
        let found = filter(
            &records,
            &FilterConfig::text(["name", "city"]),
            &FilterQuery::text("kaédi"),
        );
        assert_eq!(found, vec![&records[1]]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = clubs();
        let config = FilterConfig::text(["name", "city"]);
        assert_eq!(filter(&records, &config, &FilterQuery::text("nouak")).len(), 1);
        assert_eq!(filter(&records, &config, &FilterQuery::text("NOUAK")).len(), 1);
    }

    #[test]
    fn test_only_search_fields_are_searched() {
        let records = clubs();
        let found = filter(
            &records,
            &FilterConfig::text(["name"]),
            &FilterQuery::text("kaédi"),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_no_search_fields_matches_nothing() {
        let records = clubs();
        let found = filter(
            &records,
            &FilterConfig::default(),
            &FilterQuery::text("garde"),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_number_and_structured_fields() {
        let records = vec![
            Record::new().with("name", "Ahmed").with("number", 10),
            Record::new()
                .with("name", "Sidi")
                .with("number", 7)
                .with("team", json!({ "name": "ASC Tevragh-Zeina" })),
        ];
        let config = FilterConfig::players();

        assert_eq!(
            titles_by_name(&filter(&records, &config, &FilterQuery::text("10"))),
            vec!["Ahmed"]
        );
        assert_eq!(
            titles_by_name(&filter(&records, &config, &FilterQuery::text("tevragh"))),
            vec!["Sidi"]
        );
    }

    fn titles_by_name<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records
            .iter()
            .filter_map(|r| r.get("name").and_then(|t| t.as_str()))
            .collect()
    }

    #[test]
    fn test_large_and_tiny_numbers_match_exponent_form() {
        let records = vec![
            Record::new().with("name", "Prize fund").with("price", 1e21),
            Record::new().with("name", "Tolerance").with("price", 1e-7),
        ];
        let config = FilterConfig::products();
        assert_eq!(
            titles_by_name(&filter(&records, &config, &FilterQuery::text("1e+21"))),
            vec!["Prize fund"]
        );
        assert_eq!(
            titles_by_name(&filter(&records, &config, &FilterQuery::text("1E-7"))),
            vec!["Tolerance"]
        );
    }

    #[test]
    fn test_structured_value_searched_in_written_key_order() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"name": "ASAC Concorde", "coach": {"b": 1, "a": "Zed"}}]"#,
        )
        .unwrap();
        let found = filter(&records, &FilterConfig::teams(), &FilterQuery::text(r#"{"b":1"#));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_substring() {
        let records = vec![
            Record::new().with("name", "AS Garde"),
            Record::new().with("name", "Garde Nationale"),
        ];
        let found = filter(
            &records,
            &FilterConfig::text(["name"]),
            &FilterQuery::text(" garde"),
        );
        assert_eq!(titles_by_name(&found), vec!["AS Garde"]);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let records = news();
        let query = FilterQuery::range(DateRange::between(date(2024, 3, 1), date(2024, 3, 31)));
        let found = filter(&records, &FilterConfig::news(), &query);
        assert_eq!(
            titles(&found),
            vec!["Cup draw announced", "Quarter-final report", "Cup final preview"]
        );
    }

    #[test]
    fn test_text_and_date_combine() {
        let records = news();
        let query = FilterQuery::new("cup", DateRange::since(date(2024, 3, 2)));
        let found = filter(&records, &FilterConfig::news(), &query);
        assert_eq!(titles(&found), vec!["Cup final preview"]);
    }

    #[test]
    fn test_range_ignored_without_date_fields() {
        let records = news();
        let query = FilterQuery::new("cup", DateRange::until(date(2000, 1, 1)));
        let found = filter(&records, &FilterConfig::text(["title"]), &query);
        assert_eq!(
            titles(&found),
            vec!["Cup draw announced", "Cup final preview", "Cup stadium works"]
        );
    }

    #[test]
    fn test_any_date_field_may_match() {
        let records = vec![Record::new()
            .with("reference", "CMD-001")
            .with("created_at", "2024-01-10")
            .with("delivered_at", "2024-02-02")];
        let query = FilterQuery::range(DateRange::between(date(2024, 2, 1), date(2024, 2, 28)));
        assert_eq!(filter(&records, &FilterConfig::orders(), &query).len(), 1);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = news();
        let query = FilterQuery::range(DateRange::between(date(2024, 3, 31), date(2024, 3, 1)));
        assert!(filter(&records, &FilterConfig::news(), &query).is_empty());
    }

    #[test]
    fn test_count_agrees_with_filter() {
        let records = news();
        let config = FilterConfig::news();
        for query in [
            FilterQuery::default(),
            FilterQuery::text("cup"),
            FilterQuery::range(DateRange::since(date(2024, 3, 10))),
        ] {
            assert_eq!(
                count(&records, &config, &query),
                filter(&records, &config, &query).len()
            );
        }
    }

    #[test]
    fn test_filter_cloned() {
        let records = clubs();
        let owned = filter_cloned(
            &records,
            &FilterConfig::text(["city"]),
            &FilterQuery::text("nouakchott"),
        );
        assert_eq!(owned, vec![records[0].clone()]);
    }

    struct Product {
        name: &'static str,
        price: u32,
        listed_on: Option<&'static str>,
    }

    impl Fields for Product {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "name" => FieldValue::Text(self.name),
                "price" => FieldValue::from(self.price),
                "created_at" => FieldValue::from(self.listed_on),
                _ => FieldValue::Absent,
            }
        }
    }

    #[test]
    fn test_typed_records() {
        let products = [
            Product {
                name: "Home jersey",
                price: 1500,
                listed_on: Some("2024-05-01"),
            },
            Product {
                name: "Scarf",
                price: 400,
                listed_on: None,
            },
        ];
        let config = FilterConfig::products();

        let by_price = filter(&products, &config, &FilterQuery::text("400"));
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].name, "Scarf");

        let by_date = filter(
            &products,
            &config,
            &FilterQuery::range(DateRange::since(date(2024, 1, 1))),
        );
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date[0].name, "Home jersey");
    }
}
