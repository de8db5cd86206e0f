//! MinionType schemas for Oktoberfest venues.

use minions_fields::{FieldDef, FieldKind, MinionType};

fn schema(fields: &[(&str, FieldKind)]) -> Vec<FieldDef> {
    fields
        .iter()
        .map(|(name, kind)| FieldDef::labeled(*name, *kind))
        .collect()
}

/// An Oktoberfest tent with its metadata and capacity info.
pub fn tent_type() -> MinionType {
    use FieldKind::*;
    MinionType {
        id: "venues-tent".into(),
        name: "Tent".into(),
        slug: "tent".into(),
        description: "An Oktoberfest tent with its metadata and capacity info.".into(),
        icon: "🎪".into(),
        schema: schema(&[
            ("name", String),
            ("shortName", String),
            ("brewer", String),
            ("totalSeats", Number),
            ("standingCapacity", Number),
            ("website", String),
            ("reservationUrl", String),
            ("category", Select),
            ("isLargeTent", Boolean),
            ("status", Select),
        ]),
    }
}

/// A reservable section within a tent.
pub fn tent_area_type() -> MinionType {
    use FieldKind::*;
    MinionType {
        id: "venues-tent-area".into(),
        name: "Tent area".into(),
        slug: "tent-area".into(),
        description: "A reservable section within a tent (Boxen, gallery, terrace, etc.).".into(),
        icon: "🪑".into(),
        schema: schema(&[
            ("tentId", String),
            ("name", String),
            ("areaType", Select),
            ("seats", Number),
            ("isIndoor", Boolean),
            ("isEvening", Boolean),
            ("minimumSpend", Number),
            ("currency", String),
            ("notes", String),
        ]),
    }
}

pub fn reservation_rule_type() -> MinionType {
    use FieldKind::*;
    MinionType {
        id: "venues-reservation-rule".into(),
        name: "Reservation rule".into(),
        slug: "reservation-rule".into(),
        description: "Rules and constraints for reserving a specific tent or area.".into(),
        icon: "📏".into(),
        schema: schema(&[
            ("tentId", String),
            ("tentAreaId", String),
            ("minGroupSize", Number),
            ("maxGroupSize", Number),
            ("reservationOpenDate", String),
            ("reservationCloseDate", String),
            ("mustOrderFood", Boolean),
            ("depositRequired", Boolean),
            ("depositAmount", Number),
            ("notes", String),
        ]),
    }
}

pub fn opening_schedule_type() -> MinionType {
    use FieldKind::*;
    MinionType {
        id: "venues-opening-schedule".into(),
        name: "Opening schedule".into(),
        slug: "opening-schedule".into(),
        description: "The daily opening hours and session definitions for a tent.".into(),
        icon: "🕐".into(),
        schema: schema(&[
            ("tentId", String),
            ("date", String),
            ("openTime", String),
            ("closeTime", String),
            ("sessionType", Select),
            ("isSpecialEvent", Boolean),
            ("eventName", String),
        ]),
    }
}

/// All venue types, in display order.
pub fn custom_types() -> Vec<MinionType> {
    vec![
        tent_type(),
        tent_area_type(),
        reservation_rule_type(),
        opening_schedule_type(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_types_in_order() {
        let slugs: Vec<_> = custom_types().into_iter().map(|t| t.slug).collect();
        assert_eq!(
            slugs,
            vec!["tent", "tent-area", "reservation-rule", "opening-schedule"]
        );
    }

    #[test]
    fn field_names_unique_and_kinds_recognized() {
        for t in custom_types() {
            let mut seen = HashSet::new();
            for field in &t.schema {
                assert!(seen.insert(&field.name), "{} repeats {}", t.id, field.name);
                assert!(FieldKind::ALL.contains(&field.kind));
                assert_eq!(field.label.as_deref(), Some(field.name.as_str()));
                assert!(!field.required);
            }
        }
    }

    #[test]
    fn ids_and_slugs_unique() {
        let types = custom_types();
        let ids: HashSet<_> = types.iter().map(|t| &t.id).collect();
        let slugs: HashSet<_> = types.iter().map(|t| &t.slug).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(slugs.len(), 4);
    }

    #[test]
    fn schema_sizes() {
        assert_eq!(tent_type().schema.len(), 10);
        assert_eq!(tent_area_type().schema.len(), 9);
        assert_eq!(reservation_rule_type().schema.len(), 10);
        assert_eq!(opening_schedule_type().schema.len(), 7);
    }

    #[test]
    fn tent_schema_kinds() {
        let tent = tent_type();
        assert_eq!(tent.field("totalSeats").unwrap().kind, FieldKind::Number);
        assert_eq!(tent.field("isLargeTent").unwrap().kind, FieldKind::Boolean);
        assert_eq!(tent.field("category").unwrap().kind, FieldKind::Select);
        assert_eq!(tent.field("brewer").unwrap().kind, FieldKind::String);
    }

    #[test]
    fn tent_area_references_tent_by_plain_string() {
        let area = tent_area_type();
        assert_eq!(area.schema[0].name, "tentId");
        assert_eq!(area.schema[0].kind, FieldKind::String);
    }
}
