//! Seeded star-graph generation.
//!
//! A universe is a small set of star systems connected by travel links: a
//! chain for guaranteed connectivity plus a few extra random edges. All of it
//! is drawn from one `ChaCha8Rng`, so equal seeds produce equal universes.

use std::collections::HashSet;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use bevy::prelude::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::naming::star_name;

const NICKNAMES: &[&str] = &[
    "Dustbloom",
    "Firefly",
    "Blue Wake",
    "Iron Garden",
    "The Anvil",
    "Glass Halo",
    "Silent Drift",
    "Vagrant",
];

/// One star inside a system.
#[derive(Debug, Clone)]
pub struct Star {
    /// Unique generated name.
    pub name: String,
    /// Optional flavor nickname; unique across the universe when present.
    pub nickname: Option<String>,
}

/// A star system node of the travel graph.
#[derive(Debug, Clone)]
pub struct StarSystem {
    /// Index of this system within the universe.
    pub id: u32,
    /// The system's stars; the first is the primary.
    pub stars: Vec<Star>,
    /// Indices of directly linked systems (bidirectional).
    pub links: Vec<u32>,
    /// Ground-plane placement of the system marker.
    pub position: Vec2,
}

impl StarSystem {
    /// Name of the primary star, used to label the system.
    pub fn primary_name(&self) -> &str {
        self.stars.first().map_or("Unnamed", |s| s.name.as_str())
    }
}

/// The generated star graph.
#[derive(Debug, Clone)]
pub struct Universe {
    /// All systems, indexed by their `id`.
    pub systems: Vec<StarSystem>,
}

/// Tunables for universe generation.
#[derive(Debug, Clone)]
pub struct UniverseConfig {
    /// Number of star systems.
    pub systems: usize,
    /// Random bidirectional edges added on top of the connectivity chain.
    pub extra_edges: usize,
    /// Stars per system.
    pub stars_per_system: RangeInclusive<usize>,
    /// Probability that a star receives a nickname.
    pub nickname_chance: f64,
    /// Mean distance of system markers from the map origin.
    pub ring_radius: f32,
    /// Radial jitter applied to each marker.
    pub ring_jitter: f32,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            systems: 4,
            extra_edges: 2,
            stars_per_system: 1..=3,
            nickname_chance: 0.2,
            ring_radius: 60.0,
            ring_jitter: 14.0,
        }
    }
}

/// Seeded generator producing a [`Universe`].
pub struct UniverseGenerator {
    rng: ChaCha8Rng,
    used_names: HashSet<String>,
    used_nicknames: HashSet<String>,
    config: UniverseConfig,
}

impl UniverseGenerator {
    /// Seeded generator with the given tunables.
    pub fn with_config(seed: u64, config: UniverseConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            used_names: HashSet::new(),
            used_nicknames: HashSet::new(),
            config,
        }
    }

    /// Generates the full universe: systems, placement, and the link graph.
    pub fn generate(&mut self) -> Universe {
        let count = self.config.systems;
        let mut systems = Vec::with_capacity(count);
        for id in 0..count as u32 {
            systems.push(self.make_system(id, count));
        }
        self.connect_graph(&mut systems);

        Universe { systems }
    }

    fn make_system(&mut self, id: u32, total: usize) -> StarSystem {
        let star_count = self.rng.random_range(self.config.stars_per_system.clone());
        let stars = (0..star_count.max(1)).map(|_| self.make_star()).collect();

        // Evenly spaced around a ring, with angular and radial jitter so the
        // layout reads as scattered while staying deterministic.
        let angle = id as f32 / total.max(1) as f32 * TAU
            + self.rng.random_range(-0.25..=0.25_f32);
        let distance = self.config.ring_radius
            + self.rng.random_range(-self.config.ring_jitter..=self.config.ring_jitter);

        StarSystem {
            id,
            stars,
            links: Vec::new(),
            position: Vec2::new(angle.cos(), angle.sin()) * distance,
        }
    }

    fn make_star(&mut self) -> Star {
        Star {
            name: star_name(&mut self.rng, &mut self.used_names),
            nickname: self.maybe_nickname(),
        }
    }

    fn maybe_nickname(&mut self) -> Option<String> {
        if self.used_nicknames.len() == NICKNAMES.len() {
            return None;
        }
        if self.rng.random::<f64>() >= self.config.nickname_chance {
            return None;
        }
        // Small pool; a handful of draws is enough before giving up.
        for _ in 0..8 {
            let candidate = NICKNAMES[self.rng.random_range(0..NICKNAMES.len())];
            if self.used_nicknames.insert(candidate.to_string()) {
                return Some(candidate.to_string());
            }
        }
        None
    }

    fn connect_graph(&mut self, systems: &mut [StarSystem]) {
        // Fewer than two systems cannot form an edge; extra-edge draws would
        // only produce self-links (or panic on an empty universe).
        if systems.len() < 2 {
            return;
        }

        // Chain for basic connectivity.
        for i in 0..systems.len().saturating_sub(1) {
            let (a, b) = (i as u32, (i + 1) as u32);
            systems[i].links.push(b);
            systems[i + 1].links.push(a);
        }

        // Extra random bidirectional edges, skipping self-links and duplicates.
        for _ in 0..self.config.extra_edges {
            let a = self.rng.random_range(0..systems.len()) as u32;
            let mut b = self.rng.random_range(0..systems.len()) as u32;
            if a == b {
                b = (b + 1) % systems.len() as u32;
            }
            if !systems[a as usize].links.contains(&b) {
                systems[a as usize].links.push(b);
                systems[b as usize].links.push(a);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(seed: u64) -> Universe {
        UniverseGenerator::with_config(seed, UniverseConfig::default()).generate()
    }

    #[test]
    fn generation_is_deterministic() {
        let a = universe(123);
        let b = universe(123);

        assert_eq!(a.systems.len(), b.systems.len());
        for (sa, sb) in a.systems.iter().zip(&b.systems) {
            assert_eq!(sa.position, sb.position);
            assert_eq!(sa.links, sb.links);
            let names_a: Vec<_> = sa.stars.iter().map(|s| &s.name).collect();
            let names_b: Vec<_> = sb.stars.iter().map(|s| &s.name).collect();
            assert_eq!(names_a, names_b);
        }
    }

    #[test]
    fn star_names_are_unique_across_the_universe() {
        let universe = universe(321);
        let mut names = HashSet::new();
        for sys in &universe.systems {
            for star in &sys.stars {
                assert!(names.insert(star.name.clone()), "duplicate name {}", star.name);
            }
        }
    }

    #[test]
    fn nicknames_are_unique_when_forced() {
        let config = UniverseConfig {
            systems: 3,
            nickname_chance: 1.0,
            ..UniverseConfig::default()
        };

        let universe = UniverseGenerator::with_config(555, config).generate();
        let mut seen = HashSet::new();
        for sys in &universe.systems {
            for star in &sys.stars {
                if let Some(nick) = &star.nickname {
                    assert!(seen.insert(nick.clone()), "duplicate nickname {nick}");
                }
            }
        }
    }

    #[test]
    fn link_graph_is_connected_and_symmetric() {
        let universe = universe(9);
        let systems = &universe.systems;

        for sys in systems {
            for &link in &sys.links {
                assert_ne!(link, sys.id, "self-link on system {}", sys.id);
                assert!(
                    systems[link as usize].links.contains(&sys.id),
                    "link {} -> {} is not bidirectional",
                    sys.id,
                    link
                );
            }
        }

        // Breadth-first walk from system 0 reaches everything.
        let mut visited = HashSet::from([0u32]);
        let mut frontier = vec![0u32];
        while let Some(id) = frontier.pop() {
            for &next in &systems[id as usize].links {
                if visited.insert(next) {
                    frontier.push(next);
                }
            }
        }
        assert_eq!(visited.len(), systems.len());
    }

    #[test]
    fn degenerate_universes_get_no_links() {
        // A lone system cannot link to anything, even with extra edges
        // requested.
        let config = UniverseConfig {
            systems: 1,
            extra_edges: 3,
            ..UniverseConfig::default()
        };
        let universe = UniverseGenerator::with_config(77, config).generate();
        assert_eq!(universe.systems.len(), 1);
        assert!(universe.systems[0].links.is_empty());

        // And an empty universe generates without drawing any edges.
        let config = UniverseConfig {
            systems: 0,
            extra_edges: 2,
            ..UniverseConfig::default()
        };
        let universe = UniverseGenerator::with_config(77, config).generate();
        assert!(universe.systems.is_empty());
    }

    #[test]
    fn every_system_has_a_primary_star() {
        let universe = universe(42);
        for sys in &universe.systems {
            assert!(!sys.stars.is_empty());
            assert!(!sys.primary_name().is_empty());
        }
    }
}
