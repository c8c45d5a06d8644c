//! Population genetics formulas
//!
//! Mendelian phenotype frequencies, expected dominant offspring, independent
//! assortment probabilities and rabbit population recurrences.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::combinatorics::binomial_distribution;
use crate::error::{BioError, BioResult};

/// Phenotype frequencies expected in the next generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MendelianStats {
    pub recessive_phenotype_frequency: f64,
    pub dominant_phenotype_frequency: f64,
}

/// Predict phenotype frequencies when two distinct organisms mate at random.
///
/// `k` organisms are homozygous dominant, `m` heterozygous and `n`
/// homozygous recessive.
pub fn mendelian_inheritance(k: u32, m: u32, n: u32) -> BioResult<MendelianStats> {
    let total = k as f64 + m as f64 + n as f64;
    if total < 2.0 {
        return Err(BioError::invalid_input(
            "mendelian_inheritance needs a population of at least two organisms",
        ));
    }
    let (m, n) = (m as f64, n as f64);

    let recessive_pair = (n / total) * ((n - 1.0) / (total - 1.0));
    let heterozygous_pair = (m / total) * ((m - 1.0) / (total - 1.0));
    let mixed_pair = (m / total) * (n / (total - 1.0)) + (n / total) * (m / (total - 1.0));

    let recessive = recessive_pair + heterozygous_pair * 0.25 + mixed_pair * 0.5;

    Ok(MendelianStats {
        recessive_phenotype_frequency: recessive,
        dominant_phenotype_frequency: 1.0 - recessive,
    })
}

/// Number of couples of each mating type (D = AA, H = Aa, R = aa)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeCounts {
    pub dd: u32,
    pub dh: u32,
    pub dr: u32,
    pub hh: u32,
    pub hr: u32,
    pub rr: u32,
}

impl GenotypeCounts {
    fn as_array(&self) -> [u32; 6] {
        [self.dd, self.dh, self.dr, self.hh, self.hr, self.rr]
    }
}

const DOMINANT_PHENOTYPE_PROBABILITY: [f64; 6] = [1.0, 1.0, 1.0, 0.75, 0.5, 0.0];

/// Expected number of offspring with the dominant phenotype when every couple
/// has `offspring_per_couple` children
pub fn expected_offspring(couples: &GenotypeCounts, offspring_per_couple: u32) -> f64 {
    couples
        .as_array()
        .iter()
        .zip(DOMINANT_PHENOTYPE_PROBABILITY)
        .map(|(&count, probability)| count as f64 * probability * offspring_per_couple as f64)
        .sum()
}

/// Probability that at least `at_least` of the `2^generation` organisms in a
/// generation are Aa Bb, starting from a single Aa Bb ancestor whose
/// descendants always mate with Aa Bb partners and have two children each.
pub fn independent_alleles(generation: u32, at_least: u32) -> BioResult<f64> {
    let population = 2u32
        .checked_pow(generation)
        .ok_or_else(|| BioError::overflow(format!("2^{generation} organisms")))?;

    (at_least..=population).try_fold(0.0, |acc, i| -> BioResult<f64> {
        Ok(acc + binomial_distribution(population, i, 0.25)?)
    })
}

/// Rabbit pair populations following Fibonacci-style recurrences
#[derive(Debug, Clone, Default)]
pub struct RabbitPopulation {
    litter_pairs: u64,
    timeline: HashMap<u32, u64>,
}

impl RabbitPopulation {
    /// Each mature pair produces `litter_pairs` new pairs per generation
    pub fn new(litter_pairs: u64) -> Self {
        Self {
            litter_pairs,
            timeline: HashMap::new(),
        }
    }

    pub fn litter_pairs(&self) -> u64 {
        self.litter_pairs
    }

    /// Pairs alive after `generations` when rabbits never die
    pub fn simulate(&mut self, generations: u32) -> BioResult<u64> {
        self.timeline.entry(0).or_insert(0);
        self.timeline.entry(1).or_insert(1);

        for g in 2..=generations {
            if self.timeline.contains_key(&g) {
                continue;
            }
            let one_back = self.timeline[&(g - 1)];
            let two_back = self.timeline[&(g - 2)];
            let pairs = two_back
                .checked_mul(self.litter_pairs)
                .and_then(|offspring| offspring.checked_add(one_back))
                .ok_or_else(|| BioError::overflow(format!("rabbit population at generation {g}")))?;
            self.timeline.insert(g, pairs);
        }

        Ok(self.timeline[&generations])
    }

    /// Pairs alive after `generations` when each rabbit lives `lifespan` generations
    pub fn simulate_mortal(&self, generations: u32, lifespan: u32) -> BioResult<u64> {
        if lifespan == 0 {
            return Err(BioError::invalid_input("lifespan must be at least one generation"));
        }

        let mut populations: Vec<u64> = vec![1, 1];
        let lifespan = lifespan as usize;

        for i in 2..generations as usize {
            let overflow = || BioError::overflow(format!("rabbit population at generation {}", i + 1));
            let mut pairs = populations[i - 2]
                .checked_mul(self.litter_pairs)
                .and_then(|offspring| offspring.checked_add(populations[i - 1]))
                .ok_or_else(overflow)?;

            if i == lifespan {
                pairs = pairs.saturating_sub(1);
            } else if i > lifespan {
                pairs = pairs.saturating_sub(populations[i - lifespan - 1]);
            }

            log::trace!("Generation {}: {} pairs", i + 1, pairs);
            populations.push(pairs);
        }

        Ok(populations[populations.len() - 1])
    }
}
