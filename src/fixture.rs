//! Fixture loading and selection.
//!
//! This module loads the fixed set of order payload files the generator
//! publishes from. The set is defined by a compile-time manifest and read once
//! at startup. Files whose names mark them as well-formed orders are tagged
//! for `order_uid` injection; everything else is published byte for byte.

use std::path::Path;

use rand::{seq::IndexedRandom, Rng};

use crate::error::fixture::FixtureError;

/// Fixture file names the generator publishes, in manifest order.
///
/// Entries repeat on purpose: selection is uniform over manifest slots, so a
/// name listed three times is drawn three times as often. This reproduces the
/// deployed traffic mix where `valid1.json` makes up half the stream.
pub const FIXTURE_MANIFEST: [&str; 6] = [
    "valid1.json",
    "valid2.json",
    "valid1.json",
    "not_valid1.json",
    "valid1.json",
    "valid2.json",
];

/// Fixtures whose file names start with this prefix get a fresh `order_uid`
/// before every publish.
const INJECT_PREFIX: &str = "valid";

/// A single loaded fixture.
#[derive(Debug)]
pub struct Fixture {
    /// File name from the manifest.
    pub name: String,
    /// Raw file content as read from disk.
    pub content: Vec<u8>,
    /// Whether the payload receives a fresh `order_uid` before publishing.
    pub inject_uid: bool,
}

/// The full set of loaded fixtures, one entry per manifest slot.
#[derive(Debug)]
pub struct FixtureSet {
    fixtures: Vec<Fixture>,
}

impl FixtureSet {
    /// Loads every manifest fixture from the given directory.
    ///
    /// Fixtures named with the well-formed prefix are tagged for `order_uid`
    /// injection. Fails on the first file that cannot be read.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the fixture files
    ///
    /// # Returns
    /// - `FixtureSet` - All manifest fixtures in manifest order
    pub fn load(dir: &Path) -> Result<Self, FixtureError> {
        Self::load_with_policy(dir, true)
    }

    /// Loads every manifest fixture with `order_uid` injection disabled.
    ///
    /// All payloads are published exactly as they appear on disk, regardless
    /// of their file names.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the fixture files
    ///
    /// # Returns
    /// - `FixtureSet` - All manifest fixtures in manifest order
    pub fn load_verbatim(dir: &Path) -> Result<Self, FixtureError> {
        Self::load_with_policy(dir, false)
    }

    fn load_with_policy(dir: &Path, inject: bool) -> Result<Self, FixtureError> {
        let mut fixtures = Vec::with_capacity(FIXTURE_MANIFEST.len());

        for name in FIXTURE_MANIFEST {
            let path = dir.join(name);
            let content =
                std::fs::read(&path).map_err(|source| FixtureError::Unreadable { path, source })?;

            fixtures.push(Fixture {
                name: name.to_string(),
                content,
                inject_uid: inject && name.starts_with(INJECT_PREFIX),
            });
        }

        Ok(Self { fixtures })
    }

    /// Returns the number of loaded fixtures.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Picks one fixture uniformly at random over manifest slots.
    ///
    /// # Arguments
    /// - `rng` - Random number generator driving the draw
    ///
    /// # Returns
    /// - `Some(&Fixture)` - The drawn fixture
    /// - `None` - The set is empty
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Fixture> {
        self.fixtures.choose(rng)
    }
}
