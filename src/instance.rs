//! City coordinates and TSP instance loading.
//!
//! An instance is an ordered, read-only list of 2D city coordinates. Cities
//! are identified by their index in that list; all solvers and the scorer
//! speak in indices. Instances are loaded from headerless two-column CSV
//! files (the format the `generate` module writes) and never mutated
//! afterwards.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An immutable 2D city coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        City { x, y }
    }

    /// Euclidean distance to another city. Pure, always non-negative.
    #[inline]
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Errors raised while loading or saving an instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A complete TSP instance: a named, ordered list of cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspInstance {
    /// Name of the instance (file stem for loaded instances)
    pub name: String,
    /// List of all cities; a city's id is its index here
    pub cities: Vec<City>,
}

impl TspInstance {
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        TspInstance {
            name: name.into(),
            cities,
        }
    }

    /// Load an instance from a headerless `x,y` CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "instance".to_string());
        let file = File::open(path)?;
        let mut instance = Self::from_csv_reader(file)?;
        instance.name = name;
        Ok(instance)
    }

    /// Parse an instance from any reader producing headerless `x,y` rows.
    /// Scientific notation is accepted, so files written by numpy-style
    /// tooling load unchanged.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, InstanceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut cities = Vec::new();
        for record in csv_reader.deserialize() {
            let (x, y): (f64, f64) = record?;
            cities.push(City::new(x, y));
        }

        Ok(TspInstance::new("instance", cities))
    }

    /// Write the city list back out as a headerless `x,y` CSV file.
    pub fn to_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<(), InstanceError> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for city in &self.cities {
            writer.serialize((city.x, city.y))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Euclidean distance between cities `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.cities[i].distance_to(&self.cities[j])
    }

    /// Total cyclic tour length, including the closing edge back to the
    /// first city. Performs no validation; see [`crate::solution::score_tour`]
    /// for the validating entry point.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }

        let mut length = 0.0;
        for i in 0..tour.len() - 1 {
            length += self.distance(tour[i], tour[i + 1]);
        }

        length += self.distance(tour[tour.len() - 1], tour[0]);

        length
    }

    /// Get statistics about the instance
    pub fn statistics(&self) -> InstanceStatistics {
        let n = self.len();

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for city in &self.cities {
            min_x = min_x.min(city.x);
            min_y = min_y.min(city.y);
            max_x = max_x.max(city.x);
            max_y = max_y.max(city.y);
        }

        let mut distances: Vec<f64> = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                distances.push(self.distance(i, j));
            }
        }
        let avg_distance = if distances.is_empty() {
            0.0
        } else {
            distances.iter().sum::<f64>() / distances.len() as f64
        };
        let max_distance = distances.iter().cloned().fold(0.0, f64::max);

        InstanceStatistics {
            name: self.name.clone(),
            num_cities: n,
            min_x: if n == 0 { 0.0 } else { min_x },
            min_y: if n == 0 { 0.0 } else { min_y },
            max_x: if n == 0 { 0.0 } else { max_x },
            max_y: if n == 0 { 0.0 } else { max_y },
            avg_distance,
            max_distance,
        }
    }
}

/// Statistics about a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub name: String,
    pub num_cities: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub avg_distance: f64,
    pub max_distance: f64,
}

impl std::fmt::Display for InstanceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance: {}", self.name)?;
        writeln!(f, "  Cities: {}", self.num_cities)?;
        writeln!(
            f,
            "  Bounding box: ({:.2}, {:.2}) - ({:.2}, {:.2})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )?;
        writeln!(f, "  Avg distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max distance: {:.2}", self.max_distance)
    }
}
