use std::fmt;
use std::rc::Rc;

use rand::RngCore;

use crate::value::Value;

/// A deferred value producer.
///
/// Each call draws from the random source it is handed, so two calls yield
/// independent values. Cloning shares the underlying closure; equality is
/// pointer identity.
#[derive(Clone)]
pub struct Generator(Rc<dyn Fn(&mut dyn RngCore) -> Value>);

impl Generator {
    pub fn new(f: impl Fn(&mut dyn RngCore) -> Value + 'static) -> Self {
        Generator(Rc::new(f))
    }

    /// Invoke the generator once.
    pub fn call(&self, rng: &mut dyn RngCore) -> Value {
        (self.0)(rng)
    }

    /// True if both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Generator) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generator({:p})", Rc::as_ptr(&self.0))
    }
}
