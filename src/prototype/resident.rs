use super::Prototype;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
        }
    }
}

/// A resident whose address sits behind a shared handle.
///
/// `Resident` deliberately has no `Clone` impl: callers pick [`Prototype::shallow_copy`]
/// (the copy lives at the *same* address, and moving one moves both) or
/// [`Prototype::deep_copy`] (the copy gets its own address).
#[derive(Debug)]
pub struct Resident {
    name: String,
    age: u32,
    address: Rc<RefCell<Address>>,
}

impl Resident {
    pub fn new(name: impl Into<String>, age: u32, address: Address) -> Self {
        Self {
            name: name.into(),
            age,
            address: Rc::new(RefCell::new(address)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// A snapshot of the current address.
    pub fn address(&self) -> Address {
        self.address.borrow().clone()
    }

    /// Changes the city in place. Every resident sharing this address sees it.
    pub fn move_city(&self, city: impl Into<String>) {
        self.address.borrow_mut().city = city.into();
    }

    /// Whether both residents point at the same address allocation.
    pub fn shares_address_with(&self, other: &Resident) -> bool {
        Rc::ptr_eq(&self.address, &other.address)
    }
}

impl Prototype for Resident {
    fn shallow_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            address: Rc::clone(&self.address),
        }
    }

    fn deep_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            address: Rc::new(RefCell::new(self.address())),
        }
    }
}
