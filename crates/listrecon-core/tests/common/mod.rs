use listrecon_core::{ModelIdentity, Path};

/// Build a generation from `(id, version)` pairs per section
#[allow(dead_code)]
pub fn generation(sections: &[&[(&str, u64)]]) -> Vec<Vec<ModelIdentity>> {
    sections
        .iter()
        .map(|items| {
            items
                .iter()
                .map(|&(id, version)| ModelIdentity::new(id, version))
                .collect()
        })
        .collect()
}

/// Build a generation where every item has version 0
#[allow(dead_code)]
pub fn unversioned(sections: &[&[&str]]) -> Vec<Vec<ModelIdentity>> {
    sections
        .iter()
        .map(|ids| ids.iter().map(|&id| ModelIdentity::new(id, 0u64)).collect())
        .collect()
}

#[allow(dead_code)]
pub fn paths(pairs: &[(usize, usize)]) -> Vec<Path> {
    pairs.iter().map(|&p| Path::from(p)).collect()
}
