#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thing {
    pub name: String,
    pub size: i32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stuff {
    pub name: String,
    pub size: i32,
    pub label: String,
}

/// Keeps `size` private behind accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Junk {
    pub name: String,
    size: i32,
}

impl Junk {
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn set_size(&mut self, size: i32) {
        self.size = size.max(0);
    }
}
