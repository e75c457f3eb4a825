use serde::{Deserialize, Deserializer, Serialize};

/// A tennis player as stored in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Assigned by the store on creation, never by the caller.
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub sex: String,
    pub country: Country,
    #[serde(default)]
    pub picture: Option<String>,
    pub data: PlayerData,
}

impl Player {
    /// Checks the fields the roster relies on and returns the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("first name must not be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            return Err("last name must not be empty".to_string());
        }
        if self.country.code.trim().is_empty() {
            return Err("country code must not be empty".to_string());
        }
        if self.data.points < 0 {
            return Err(format!("points must be >= 0, got {}", self.data.points));
        }
        if self.data.age < 0 {
            return Err(format!("age must be >= 0, got {}", self.data.age));
        }
        Ok(())
    }

    /// Returns the same player pinned to `id`.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub rank: i32,
    pub points: i32,
    /// Grams.
    pub weight: i32,
    /// Centimeters.
    pub height: i32,
    pub age: i32,
    /// Match outcomes in recorded order, 1 for a win and 0 for a loss.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last: Vec<u8>,
}

impl PlayerData {
    pub fn wins(&self) -> usize {
        self.last.iter().filter(|&&outcome| outcome == 1).count()
    }

    pub fn matches(&self) -> usize {
        self.last.len()
    }
}

/// Aggregates computed over the whole roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Country code with the best win ratio, or `"N/A"`.
    pub best_country: String,
    pub average_bmi: f64,
    pub median_height: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u8>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 52,
            "firstName": "Novak",
            "lastName": "Djokovic",
            "shortName": "N.DJO",
            "sex": "M",
            "country": { "picture": "https://example.org/srb.png", "code": "SRB" },
            "picture": "https://example.org/djokovic.png",
            "data": {
                "rank": 2,
                "points": 2542,
                "weight": 80000,
                "height": 188,
                "age": 31,
                "last": [1, 1, 1, 1, 1]
            }
        }"#
    }

    #[test]
    fn test_player_reads_camel_case_document() {
        let player: Player = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(player.id, 52);
        assert_eq!(player.first_name, "Novak");
        assert_eq!(player.short_name.as_deref(), Some("N.DJO"));
        assert_eq!(player.country.code, "SRB");
        assert_eq!(player.data.height, 188);
        assert_eq!(player.data.wins(), 5);
    }

    #[test]
    fn test_null_or_missing_last_reads_as_empty() {
        let with_null = sample_json().replace("[1, 1, 1, 1, 1]", "null");
        let player: Player = serde_json::from_str(&with_null).unwrap();
        assert!(player.data.last.is_empty());

        let mut without: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
        without["data"].as_object_mut().unwrap().remove("last");
        let player: Player = serde_json::from_value(without).unwrap();
        assert!(player.data.last.is_empty());
        assert_eq!(player.data.matches(), 0);
    }

    #[test]
    fn test_player_serializes_camel_case_keys() {
        let player: Player = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(value["firstName"], "Novak");
        assert_eq!(value["lastName"], "Djokovic");
        assert_eq!(value["data"]["last"], serde_json::json!([1, 1, 1, 1, 1]));
    }

    #[test]
    fn test_validate_rejects_blank_names_and_negative_counters() {
        let player: Player = serde_json::from_str(sample_json()).unwrap();
        assert!(player.validate().is_ok());

        let mut blank = player.clone();
        blank.first_name = "  ".to_string();
        assert_eq!(
            blank.validate().unwrap_err(),
            "first name must not be empty"
        );

        let mut no_country = player.clone();
        no_country.country.code = String::new();
        assert!(no_country.validate().is_err());

        let mut negative = player;
        negative.data.points = -1;
        assert_eq!(negative.validate().unwrap_err(), "points must be >= 0, got -1");
    }

    #[test]
    fn test_statistics_serializes_camel_case_keys() {
        let stats = Statistics {
            best_country: "SRB".to_string(),
            average_bmi: 23.36,
            median_height: 185.0,
        };
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["bestCountry"], "SRB");
        assert_eq!(value["averageBmi"], 23.36);
        assert_eq!(value["medianHeight"], 185.0);
    }
}
