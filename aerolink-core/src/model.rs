use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub founding_date: NaiveDate,
    pub website: String,
    /// Associated airports. Unique by airport id, no ordering contract.
    #[serde(default)]
    pub airports: Vec<Airport>,
}

impl Airline {
    /// Membership test by airport id. Linear scan; sets stay small.
    pub fn has_airport(&self, airport_id: Uuid) -> bool {
        self.airports.iter().any(|a| a.id == airport_id)
    }

    /// Adds an airport to the associated set. No-op when the id is
    /// already a member.
    pub fn add_airport(&mut self, airport: Airport) {
        if !self.has_airport(airport.id) {
            self.airports.push(airport);
        }
    }

    /// Removes an airport from the associated set by id.
    pub fn remove_airport(&mut self, airport_id: Uuid) {
        self.airports.retain(|a| a.id != airport_id);
    }

    /// Replaces the associated set wholesale. Repeated ids in the input
    /// collapse to a single membership.
    pub fn set_airports(&mut self, airports: Vec<Airport>) {
        self.airports.clear();
        for airport in airports {
            self.add_airport(airport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(name: &str, code: &str) -> Airport {
        Airport {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: code.to_string(),
            country: "Colombia".to_string(),
            city: "Bogotá".to_string(),
        }
    }

    fn airline() -> Airline {
        Airline {
            id: Uuid::new_v4(),
            name: "Avianca".to_string(),
            description: "Flag carrier".to_string(),
            founding_date: NaiveDate::from_ymd_opt(1919, 12, 5).unwrap(),
            website: "https://www.avianca.com".to_string(),
            airports: Vec::new(),
        }
    }

    #[test]
    fn add_airport_is_idempotent_by_id() {
        let mut a = airline();
        let p = airport("El Dorado", "BOG");

        a.add_airport(p.clone());
        a.add_airport(p.clone());

        assert_eq!(a.airports.len(), 1);
        assert!(a.has_airport(p.id));
    }

    #[test]
    fn remove_airport_keeps_the_rest() {
        let mut a = airline();
        let p1 = airport("El Dorado", "BOG");
        let p2 = airport("José María Córdova", "MDE");
        a.add_airport(p1.clone());
        a.add_airport(p2.clone());

        a.remove_airport(p1.id);

        assert!(!a.has_airport(p1.id));
        assert!(a.has_airport(p2.id));
    }

    #[test]
    fn set_airports_collapses_duplicates() {
        let mut a = airline();
        let p = airport("El Dorado", "BOG");

        a.set_airports(vec![p.clone(), p.clone()]);

        assert_eq!(a.airports.len(), 1);
    }

    #[test]
    fn airline_serializes_with_airports_field() {
        let mut a = airline();
        a.add_airport(airport("El Dorado", "BOG"));

        let value = serde_json::to_value(&a).unwrap();
        assert_eq!(value["airports"].as_array().unwrap().len(), 1);
        assert_eq!(value["airports"][0]["code"], "BOG");
    }
}
