/// One variable per lower case letter.
pub const VARIABLES: usize = 26;

/// ## Variable memory
///
/// Every variable exists and starts at zero. Indexes outside `a`..`z`
/// read as zero and ignore writes.
#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: [i16; VARIABLES],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars = [0; VARIABLES];
    }

    pub fn fetch(&self, index: usize) -> i16 {
        self.vars.get(index).copied().unwrap_or(0)
    }

    pub fn store(&mut self, index: usize, value: i16) {
        if let Some(var) = self.vars.get_mut(index) {
            *var = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zero() {
        let var = Var::new();
        assert!((0..VARIABLES).all(|i| var.fetch(i) == 0));
    }

    #[test]
    fn test_out_of_range() {
        let mut var = Var::new();
        var.store(26, 5);
        var.store(usize::max_value(), 5);
        assert_eq!(var.fetch(26), 0);
        var.store(25, -7);
        assert_eq!(var.fetch(25), -7);
        var.store(0, 1);
        assert_eq!(var.fetch(0), 1);
        var.clear();
        assert_eq!(var.fetch(25), 0);
    }
}
