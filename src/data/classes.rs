//! Character class templates
//!
//! Loaded from `classes.ron` when present, otherwise the built-in table.

use serde::{Deserialize, Serialize};

/// Immutable base-stat template for a playable class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    /// Class name, also stored on the character
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Crit chance in percent
    pub crit_chance: f64,
    /// Crit damage multiplier
    pub crit_damage: f64,
    pub weapon_name: String,
    pub weapon_bonus: i32,
    pub playstyle: String,
}

/// Collection of class templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplates {
    pub templates: Vec<ClassTemplate>,
}

impl ClassTemplates {
    /// Find a template by class name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&ClassTemplate> {
        self.templates.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

fn template(
    name: &str,
    hp: i32,
    attack: i32,
    defense: i32,
    crit_chance: f64,
    crit_damage: f64,
    weapon_name: &str,
    weapon_bonus: i32,
    playstyle: &str,
) -> ClassTemplate {
    ClassTemplate {
        name: name.to_string(),
        hp,
        attack,
        defense,
        crit_chance,
        crit_damage,
        weapon_name: weapon_name.to_string(),
        weapon_bonus,
        playstyle: playstyle.to_string(),
    }
}

/// Create default class templates (hardcoded fallback)
pub fn default_class_templates() -> ClassTemplates {
    ClassTemplates {
        templates: vec![
            template("Warrior", 120, 12, 8, 3.0, 1.4, "Iron Sword", 5, "Tank with high HP and defense"),
            template("Mage", 80, 15, 3, 7.0, 1.8, "Apprentice Wand", 7, "Glass cannon with highest damage"),
            template("Rogue", 90, 10, 5, 15.0, 2.0, "Sharp Dagger", 4, "Critical hit specialist"),
            template("Archer", 85, 14, 4, 10.0, 1.6, "Hunting Bow", 6, "Balanced ranged fighter"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let classes = default_class_templates();
        let mage = classes.find("mage").expect("mage exists");
        assert_eq!(mage.weapon_name, "Apprentice Wand");
        assert_eq!(mage.weapon_bonus, 7);
        assert!(classes.find("Necromancer").is_none());
        assert_eq!(classes.names(), vec!["Warrior", "Mage", "Rogue", "Archer"]);
    }
}
