use super::Simulation;

impl Simulation {
    /// Fold freshly acquired strains into each host, then complete the
    /// cross product of carried segments, minus what the species cannot
    /// sustain.
    pub(super) fn reassortment_stage(&mut self) {
        let Self {
            population,
            susceptibility,
            ..
        } = self;
        for host in population.iter_mut() {
            host.strains.merge(&host.pending);
            host.pending.clear();
            if host.strains.is_empty() {
                continue;
            }
            host.strains.reassort();
            host.strains.restrict(susceptibility.mask(host.species));
        }
    }
}
