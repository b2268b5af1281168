use serde::{Deserialize, Serialize};

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Simulation area width.
    pub world_width: f32,
    /// Simulation area height.
    pub world_height: f32,
    /// Margin kept between wander targets and the world edge.
    pub wander_margin: f32,
    /// Margin kept between initial entity placement and the world edge.
    pub spawn_margin: f32,
    /// Creatures spawned at simulation start.
    pub n_creatures: usize,
    /// Maximum creature population (reproduction stops at this cap).
    pub max_creatures: usize,
    /// Minimum initial creature speed (distance per tick).
    pub speed_min: f32,
    /// Maximum initial creature speed (exclusive).
    pub speed_max: f32,
    /// Minimum initial apple-detection radius.
    pub view_range_min: f32,
    /// Maximum initial apple-detection radius (exclusive).
    pub view_range_max: f32,
    /// Hunger gained per tick.
    pub hunger_rate: f32,
    /// Thirst gained per tick.
    pub thirst_rate: f32,
    /// Value at which a need saturates and the creature starves.
    pub need_max: f32,
    /// Need level that switches a creature into goal-directed seeking.
    pub seek_threshold: f32,
    /// Hunger above which an adjacent apple is eaten.
    pub eat_threshold: f32,
    /// Thirst above which pond water is drunk.
    pub drink_threshold: f32,
    /// Both needs must be below this for a creature to reproduce.
    pub fertility_threshold: f32,
    /// Distance within which an apple is eaten.
    pub eat_radius: f32,
    /// Minimum number of apple trees spawned.
    pub n_trees_min: usize,
    /// Maximum number of apple trees spawned (inclusive).
    pub n_trees_max: usize,
    /// Minimum number of ponds spawned.
    pub n_ponds_min: usize,
    /// Maximum number of ponds spawned (inclusive).
    pub n_ponds_max: usize,
    /// Pond radius.
    pub pond_radius: f32,
    /// Apples a tree can hold at once.
    pub max_apples: usize,
    /// Time units between an apple being eaten and its replacement growing.
    pub regrowth_delay: f32,
    /// Height of the crown center above the trunk, where apples grow.
    pub crown_offset: f32,
    /// Minimum radial distance of an apple from the crown center.
    pub apple_radial_min: f32,
    /// Maximum radial distance of an apple from the crown center (exclusive).
    pub apple_radial_max: f32,
    /// Half-angle of the crown arc apples grow in, radians.
    pub apple_arc: f32,
    /// Minimum distance between two trees.
    pub tree_spacing: f32,
    /// Minimum distance between two ponds.
    pub pond_spacing: f32,
    /// Minimum distance between a pond and a tree.
    pub pond_tree_spacing: f32,
    /// Placement attempts before a separation constraint is relaxed.
    pub max_placement_attempts: usize,
    /// Per-tick probability of a reproduction attempt while below the cap.
    pub birth_rate: f32,
    /// Maximum per-axis offset of a child from its parent.
    pub offspring_offset: f32,
    /// Maximum speed perturbation inherited by a child.
    pub speed_jitter: f32,
    /// Lowest speed a child can inherit.
    pub speed_floor: f32,
    /// Maximum view-range perturbation inherited by a child.
    pub view_range_jitter: f32,
    /// Lowest view range a child can inherit.
    pub view_range_floor: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            wander_margin: 20.0,
            spawn_margin: 50.0,
            n_creatures: 5,
            max_creatures: 10,
            speed_min: 1.0,
            speed_max: 3.0,
            view_range_min: 100.0,
            view_range_max: 200.0,
            hunger_rate: 0.1,
            thirst_rate: 0.1,
            need_max: 100.0,
            seek_threshold: 70.0,
            eat_threshold: 50.0,
            drink_threshold: 50.0,
            fertility_threshold: 50.0,
            eat_radius: 10.0,
            n_trees_min: 5,
            n_trees_max: 7,
            n_ponds_min: 2,
            n_ponds_max: 3,
            pond_radius: 40.0,
            max_apples: 3,
            regrowth_delay: 10.0,
            crown_offset: 42.0,
            apple_radial_min: 5.0,
            apple_radial_max: 20.0,
            apple_arc: 40.0_f32.to_radians(),
            tree_spacing: 100.0,
            pond_spacing: 100.0,
            pond_tree_spacing: 80.0,
            max_placement_attempts: 100,
            birth_rate: 0.002,
            offspring_offset: 20.0,
            speed_jitter: 0.2,
            speed_floor: 1.0,
            view_range_jitter: 10.0,
            view_range_floor: 50.0,
        }
    }
}

impl Params {
    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
