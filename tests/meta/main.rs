//! Repository layout checks that keep the unit test tree mirrored on `src`
