/// # Quirks
///
/// Historical interpreters disagree on a few instruction behaviors, and ROMs
/// depend on whichever convention their target interpreter used. These flags
/// select between the known conventions.
///
/// The defaults follow the original COSMAC VIP interpreter; clearing a flag
/// selects the CHIP-48/SCHIP lineage behavior instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE shift VY and store the result in VX. When false, VX is
    /// shifted in place and VY is ignored.
    pub shift_reads_vy: bool,

    /// FX55/FX65 leave I pointing past the transferred range (I + X + 1).
    /// When false, I is left unchanged.
    pub load_store_bumps_i: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            shift_reads_vy: true,
            load_store_bumps_i: true,
        }
    }
}
