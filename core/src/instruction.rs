use crate::opcode::Opcode;
use crate::operations::*;

/// Selects the handler for a decoded opcode.
///
/// Selection is cased on the top nibble and, within the 0x0/0x8/0xE/0xF
/// families, on the trailing nibble(s). Patterns with no assigned operation
/// fall through to the no-op: the word still cost a fetch and decode, but
/// has no effect.
pub fn dispatch(op: Opcode) -> Handler {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => cls,
        (0x0, 0x0, 0xE, 0xE) => ret,
        (0x1, ..) => jp,
        (0x2, ..) => call,
        (0x3, ..) => se_nn,
        (0x4, ..) => sne_nn,
        (0x5, .., 0x0) => se_xy,
        (0x6, ..) => ld_nn,
        (0x7, ..) => add_nn,
        (0x8, .., 0x0) => ld_xy,
        (0x8, .., 0x1) => or_xy,
        (0x8, .., 0x2) => and_xy,
        (0x8, .., 0x3) => xor_xy,
        (0x8, .., 0x4) => add_xy,
        (0x8, .., 0x5) => sub_xy,
        (0x8, .., 0x6) => shr_xy,
        (0x8, .., 0x7) => subn_xy,
        (0x8, .., 0xE) => shl_xy,
        (0x9, .., 0x0) => sne_xy,
        (0xA, ..) => ld_i,
        (0xB, ..) => jp_v0,
        (0xC, ..) => rnd,
        (0xD, ..) => drw,
        (0xE, .., 0x9, 0xE) => skp,
        (0xE, .., 0xA, 0x1) => sknp,
        (0xF, .., 0x0, 0x7) => ld_from_dt,
        (0xF, .., 0x0, 0xA) => ld_key,
        (0xF, .., 0x1, 0x5) => ld_dt,
        (0xF, .., 0x1, 0x8) => ld_st,
        (0xF, .., 0x1, 0xE) => add_i,
        (0xF, .., 0x2, 0x9) => ld_font,
        (0xF, .., 0x3, 0x3) => bcd,
        (0xF, .., 0x5, 0x5) => save_regs,
        (0xF, .., 0x6, 0x5) => load_regs,
        _ => noop,
    }
}
