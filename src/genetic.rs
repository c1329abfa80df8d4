//! Genetic operators over permutation genomes.

use rand::Rng;

/// Implements the genetic operators (crossover, mutation).
///
/// Both operators are closed over permutations: given valid permutations
/// they produce valid permutations, never duplicating or dropping an
/// index. Callers must invalidate the fitness of any genome they pass in.
pub struct Genetic;

impl Genetic {
    /// Partially-matched crossover between two parent genomes of equal
    /// length, producing two children in place.
    ///
    /// Two cut points are drawn from the shared random source; the
    /// inclusive segment between them is exchanged and conflicts outside
    /// the segment are repaired through the mapping the exchange induces.
    pub fn crossover<R: Rng>(&self, genome1: &mut [usize], genome2: &mut [usize], rng: &mut R) {
        let size = genome1.len();

        if size < 2 || genome2.len() != size {
            return;
        }

        let cut1 = rng.gen_range(0..size);
        let cut2 = rng.gen_range(0..size);

        let (start, end) = if cut1 <= cut2 {
            (cut1, cut2)
        } else {
            (cut2, cut1)
        };

        Self::crossover_with_cuts(genome1, genome2, start, end);
    }

    /// PMX with explicit cut points, segment inclusive on both ends.
    ///
    /// Exposed separately so the repair logic can be exercised with
    /// deterministic cuts.
    pub fn crossover_with_cuts(
        genome1: &mut [usize],
        genome2: &mut [usize],
        start: usize,
        end: usize,
    ) {
        let size = genome1.len();

        // Position of each index within each genome
        let mut pos1 = vec![0; size];
        let mut pos2 = vec![0; size];

        for i in 0..size {
            pos1[genome1[i]] = i;
            pos2[genome2[i]] = i;
        }

        for i in start..=end {
            let gene1 = genome1[i];
            let gene2 = genome2[i];

            // Swap the matched genes into place, then keep the position
            // tables consistent for the rest of the segment
            genome1.swap(i, pos1[gene2]);
            genome2.swap(i, pos2[gene1]);

            pos1.swap(gene1, gene2);
            pos2.swap(gene1, gene2);
        }
    }

    /// Index-shuffling mutation: each position is swapped, with
    /// independent probability `per_gene_rate`, against a position chosen
    /// uniformly among the remaining ones.
    pub fn mutate<R: Rng>(&self, genome: &mut [usize], per_gene_rate: f64, rng: &mut R) {
        let size = genome.len();

        if size < 2 {
            return;
        }

        for i in 0..size {
            if rng.gen::<f64>() < per_gene_rate {
                // Draw from the other size - 1 positions
                let mut j = rng.gen_range(0..size - 1);
                if j >= i {
                    j += 1;
                }

                genome.swap(i, j);
            }
        }
    }
}
