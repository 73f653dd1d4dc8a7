//! Groups already-fetched wild encounter records into a per-area listing.
//!
//! Input mirrors the shape of public Pokémon data: a location has areas, an
//! area lists Pokémon, and each Pokémon carries per-version encounter
//! details (method, chance, conditions). The output is keyed by area display
//! name, then by method display name, with species sorted by rate.

use crate::game::Game;
use std::collections::BTreeMap;

/// One way a species can be met in an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterDetail {
    /// Method slug, e.g. `"walk"`, `"old-rod"`.
    pub method: String,
    /// Slot chance in percent.
    pub chance: u32,
    /// Condition slugs, e.g. `"time-night"`, `"radar-on"`.
    pub conditions: Vec<String>,
}

impl EncounterDetail {
    pub fn new(method: &str, chance: u32, conditions: &[&str]) -> Self {
        Self {
            method: method.to_string(),
            chance,
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn has(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }

    fn has_prefixed(&self, prefix: &str) -> bool {
        self.conditions.iter().any(|c| c.starts_with(prefix))
    }

    /// Walk slots that only exist under special conditions (radar, swarm,
    /// radio stations, dual-slot cartridges).
    fn is_special_walk(&self) -> bool {
        self.has("radar-on")
            || self.has("swarm-yes")
            || (self.has_prefixed("radio-") && !self.has("radio-off"))
            || (self.has_prefixed("slot2-") && !self.has("slot2-none"))
    }

    /// Method display names this detail contributes to.
    fn method_keys(&self) -> Vec<String> {
        if self.method != "walk" {
            return vec![title_case(&self.method)];
        }
        const TIMES: [(&str, &str); 3] =
            [("time-morning", "Morning"), ("time-day", "Day"), ("time-night", "Night")];
        let times: Vec<String> = TIMES
            .iter()
            .filter(|(cond, _)| self.has(cond))
            .map(|(_, label)| format!("Walk - {label}"))
            .collect();
        if times.is_empty() {
            vec!["Walk".to_string()]
        } else {
            times
        }
    }
}

/// Encounter details of one species for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDetail {
    pub version: String,
    pub details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonEncounter {
    pub pokemon: String,
    pub versions: Vec<VersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationArea {
    pub name: String,
    pub encounters: Vec<PokemonEncounter>,
}

/// A species and its summed encounter rate under one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterEntry {
    pub name: String,
    pub display_name: String,
    pub rate: u32,
}

/// Method display name to entries, rate-descending.
pub type MethodTable = BTreeMap<String, Vec<EncounterEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterTable {
    pub areas: BTreeMap<String, MethodTable>,
}

impl EncounterTable {
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn area(&self, name: &str) -> Option<&MethodTable> {
        self.areas.get(name)
    }

    /// Total entries across all areas and methods.
    pub fn entry_count(&self) -> usize {
        self.areas.values().flat_map(|m| m.values()).map(Vec::len).sum()
    }
}

/// `"old-rod"` → `"Old Rod"`.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Area display name: the location prefix is stripped, words title-cased.
pub fn area_display_name(location: &str, area: &str) -> String {
    let short = area
        .strip_prefix(location)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(area);
    title_case(short)
}

/// Group the encounters of `areas` for `version`.
///
/// ```
/// use pokecalc::encounters::{
///     group_encounters, EncounterDetail, LocationArea, PokemonEncounter, VersionDetail,
/// };
/// use pokecalc::game::Game;
///
/// let area = LocationArea {
///     name: "viridian-forest-area".into(),
///     encounters: vec![PokemonEncounter {
///         pokemon: "pikachu".into(),
///         versions: vec![VersionDetail {
///             version: "red".into(),
///             details: vec![EncounterDetail::new("walk", 5, &[])],
///         }],
///     }],
/// };
/// let table = group_encounters(Game::Red, "viridian-forest", &[area]);
/// assert_eq!(table.area("Area").unwrap()["Walk"][0].rate, 5);
/// ```
pub fn group_encounters(version: Game, location: &str, areas: &[LocationArea]) -> EncounterTable {
    // area -> method -> species -> summed chance
    let mut sums: BTreeMap<String, BTreeMap<String, BTreeMap<String, u32>>> = BTreeMap::new();

    for area in areas {
        let area_name = area_display_name(location, &area.name);
        for encounter in &area.encounters {
            let detail = encounter.versions.iter().find(|v| v.version == version.slug());
            let Some(detail) = detail else {
                continue;
            };
            for d in &detail.details {
                if d.method == "walk" && d.is_special_walk() {
                    continue;
                }
                for key in d.method_keys() {
                    *sums
                        .entry(area_name.clone())
                        .or_default()
                        .entry(key)
                        .or_default()
                        .entry(encounter.pokemon.clone())
                        .or_default() += d.chance;
                }
            }
        }
    }

    let areas = sums
        .into_iter()
        .map(|(area, methods)| {
            let methods = methods
                .into_iter()
                .map(|(method, species)| {
                    let mut entries: Vec<EncounterEntry> = species
                        .into_iter()
                        .map(|(name, rate)| EncounterEntry {
                            display_name: title_case(&name),
                            name,
                            rate,
                        })
                        .collect();
                    entries.sort_by(|a, b| b.rate.cmp(&a.rate).then_with(|| a.name.cmp(&b.name)));
                    (method, entries)
                })
                .collect();
            (area, methods)
        })
        .collect();
    EncounterTable { areas }
}
