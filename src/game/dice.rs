use rand::Rng;

/// Every value a single die can show. Zero never appears.
pub const DIE_FACES: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// Maps a raw 1..=6 draw onto the signed die: 1..=3 move backwards, 4..=6 forwards.
pub fn die_from_face(face: u8) -> i32 {
    let face = face as i32;
    if face <= 3 { -face } else { face - 3 }
}

pub fn roll_die(rng: &mut impl Rng) -> i32 {
    die_from_face(rng.gen_range(1..=6))
}

pub fn is_valid_die(value: i32) -> bool {
    DIE_FACES.contains(&value)
}
