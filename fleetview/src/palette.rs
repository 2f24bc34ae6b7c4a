//! Series colors: fixed for well-known services, otherwise assigned once and cached
//! so a server keeps the same color in every chart.

use std::collections::HashMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},1)", self.r, self.g, self.b)
    }
}

pub const DEFAULT_COLOR: Color = Color::rgb(168, 32, 128);

pub fn well_known(name: &str) -> Option<Color> {
    match name {
        "persistence" => Some(Color::rgb(255, 0, 0)),
        "connector" => Some(Color::rgb(0, 255, 0)),
        "registry" => Some(Color::rgb(0, 220, 255)),
        _ => None,
    }
}

/// What unknown series get on first sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFallback {
    #[default]
    Random,
    Fixed,
}

impl std::str::FromStr for ColorFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("unknown color fallback '{other}' (expected random|fixed)")),
        }
    }
}

pub struct ColorRegistry {
    assigned: HashMap<String, Color>,
    // assignment order, for the frame legend
    order: Vec<String>,
    min_brightness: u8,
    fallback: ColorFallback,
    rng: StdRng,
}

impl ColorRegistry {
    pub fn new(min_brightness: u8, fallback: ColorFallback) -> Self {
        Self::with_rng(min_brightness, fallback, StdRng::from_os_rng())
    }

    pub fn with_seed(min_brightness: u8, fallback: ColorFallback, seed: u64) -> Self {
        Self::with_rng(min_brightness, fallback, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min_brightness: u8, fallback: ColorFallback, rng: StdRng) -> Self {
        Self {
            assigned: HashMap::new(),
            order: Vec::new(),
            min_brightness,
            fallback,
            rng,
        }
    }

    pub fn color_for(&mut self, id: &str) -> Color {
        if let Some(c) = self.assigned.get(id) {
            return *c;
        }
        let c = match well_known(id) {
            Some(c) => c,
            None => match self.fallback {
                ColorFallback::Random => self.random_color(),
                ColorFallback::Fixed => DEFAULT_COLOR,
            },
        };
        self.assigned.insert(id.to_string(), c);
        self.order.push(id.to_string());
        c
    }

    pub fn get(&self, id: &str) -> Option<Color> {
        self.assigned.get(id).copied()
    }

    /// Assigned colors in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.assigned.get(id).map(|c| (id.as_str(), *c)))
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    fn random_color(&mut self) -> Color {
        Color::rgb(
            self.random_channel(),
            self.random_channel(),
            self.random_channel(),
        )
    }

    // Uniform in [floor, 255); a floor of 255 pins the channel
    fn random_channel(&mut self) -> u8 {
        let floor = self.min_brightness;
        if floor == u8::MAX {
            return u8::MAX;
        }
        self.rng.random_range(floor..u8::MAX)
    }
}

impl fmt::Debug for ColorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorRegistry")
            .field("assigned", &self.assigned.len())
            .field("min_brightness", &self.min_brightness)
            .field("fallback", &self.fallback)
            .finish()
    }
}
