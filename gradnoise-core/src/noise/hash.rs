/// Hashes an integer lattice corner into a gradient index in `[0, N)`.
///
/// `permutation_table` is three concatenated permutations of `[0, N)`, one
/// per axis, with `N = permutation_axis_len` a power of two. Each coordinate
/// is reinterpreted as unsigned, masked to `[0, N)`, offset into its axis
/// segment and looked up; the three results are combined with XOR.
///
/// The unsigned reinterpretation happens before masking so negative
/// coordinates wrap with period `N` exactly like positive ones.
#[inline]
#[must_use]
pub fn noise_hash(
    x: i32,
    y: i32,
    z: i32,
    permutation_table: &[u32],
    permutation_axis_len: u32,
) -> u32 {
    debug_assert!(permutation_axis_len.is_power_of_two());
    debug_assert!(permutation_table.len() >= 3 * permutation_axis_len as usize);

    let mask = permutation_axis_len - 1;
    let ix = (x as u32 & mask) as usize;
    let iy = ((y as u32 & mask) + permutation_axis_len) as usize;
    let iz = ((z as u32 & mask) + 2 * permutation_axis_len) as usize;
    permutation_table[ix] ^ permutation_table[iy] ^ permutation_table[iz]
}
