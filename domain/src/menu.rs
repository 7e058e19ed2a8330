//! Menu: the configured decision space for a food session
//!
//! A menu holds the default cuisine set used to seed stage 1 and, per
//! cuisine, the restaurant sub-list used to seed stage 2 when that cuisine
//! wins. Both are overridable from configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The decision space: stage-1 cuisines and their restaurant sub-lists
///
/// # Example
///
/// ```
/// use forkvote_domain::Menu;
///
/// let menu = Menu::default();
/// assert!(menu.cuisines().contains(&"Pizza".to_string()));
/// assert!(menu.sub_list("Pizza").is_some());
/// assert!(menu.sub_list("Sushi").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    /// Default option set for the cuisine vote, in announcement order
    cuisines: Vec<String>,
    /// Restaurant sub-list per cuisine; a winning cuisine with a non-empty
    /// entry here seeds the restaurant vote
    restaurants: HashMap<String, Vec<String>>,
}

impl Menu {
    /// Create a menu from explicit cuisines and sub-lists
    pub fn new(cuisines: Vec<String>, restaurants: HashMap<String, Vec<String>>) -> Self {
        Self {
            cuisines,
            restaurants,
        }
    }

    /// The cuisine option set, in announcement order
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// The restaurant sub-list for a cuisine
    ///
    /// A missing key and an empty entry both mean "no sub-list": stage 2
    /// must never open with zero options, so an empty list cannot seed it.
    pub fn sub_list(&self, cuisine: &str) -> Option<&[String]> {
        self.restaurants
            .get(cuisine)
            .map(|r| r.as_slice())
            .filter(|r| !r.is_empty())
    }
}

impl Default for Menu {
    fn default() -> Self {
        let cuisines = [
            "Chinese",
            "Thai",
            "Indian",
            "Mexican",
            "Burger",
            "Pizza",
        ];

        let restaurants = [
            ("Chinese", vec!["Golden Wok", "Lucky Dragon"]),
            ("Thai", vec!["Thai Orchid", "Bangkok Kitchen"]),
            ("Indian", vec!["Taj Spice", "Curry Leaf"]),
            ("Mexican", vec!["El Camino", "Taqueria Sol"]),
            ("Burger", vec!["Patty Shack", "Grill Brothers"]),
            ("Pizza", vec!["Mario's Slice", "Brick Oven"]),
        ];

        Self {
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            restaurants: restaurants
                .into_iter()
                .map(|(c, rs)| (c.to_string(), rs.into_iter().map(String::from).collect()))
                .collect(),
        }
    }
}
