use std::cell::RefCell;
use std::rc::Rc;
use theme_starter::theme::RootElement;

#[allow(dead_code)]
pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Records every attribute assignment in order.
#[derive(Clone, Default)]
pub struct MockRoot {
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl MockRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn values(&self) -> Vec<String> {
        self.writes.borrow().iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

impl RootElement for MockRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.writes.borrow_mut().push((name.to_string(), value.to_string()));
    }
}
