use crc32fast::Hasher;

/// Derive a stable page id from the page name using CRC32.
pub fn get_page_id(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(format!("page://{}", name).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for sections within a page.
#[derive(Clone)]
pub struct IdGenerator {
    seed: String, // Page ID (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(page_name: &str) -> Self {
        Self {
            seed: get_page_id(page_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_is_stable() {
        let id1 = get_page_id("landing");
        let id2 = get_page_id("landing");
        assert_eq!(id1, id2);

        let id3 = get_page_id("other");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("landing");

        let id1 = gen.new_id();
        let id2 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id1.starts_with(gen.seed()));
        assert_ne!(id1, id2);
    }
}
