/// Scrambles `a` into a well distributed 32-bit value.
///
/// Six rounds of add/xor/shift with fixed constants, all arithmetic wrapping. Used to
/// decorrelate seeds of per-ray random streams.
#[inline]
pub fn mix_hash(a: u32) -> u32 {
    let mut a = a;
    a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    a = (a ^ 0xc761_c23c) ^ (a >> 19);
    a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    a = (a ^ 0xb55a_4f09) ^ (a >> 16);
    a
}
