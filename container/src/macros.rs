//! Public macros for wiring component structs into the container.

/// Implements [`Bean`](crate::bean::Bean) for a struct by routing method
/// names to inherent methods and field names to [`Slot`](crate::bean::Slot)
/// fields.
///
/// Routed methods must have the signature
/// `fn(&self, &[Value]) -> Result<Value, InvokeError>`. The `fields` block
/// is optional; every listed field must be a `Slot`. Unknown method names
/// produce [`InvokeError::UnknownMethod`](crate::error::InvokeError), and
/// unknown field names are reported back to the resolver as not accepted.
///
/// # Examples
///
/// ```
/// use heddle::{impl_bean, Bean, InvokeError, Slot, Value};
///
/// struct GreetService {
///   fallback: Slot,
/// }
///
/// impl GreetService {
///   fn greet(&self, args: &[Value]) -> Result<Value, InvokeError> {
///     let name = args.first().and_then(Value::as_str).unwrap_or("world");
///     Ok(Value::Str(format!("Hello, {}!", name)))
///   }
/// }
///
/// impl_bean!(GreetService {
///   methods { "greet" => greet }
///   fields { "fallback" => fallback }
/// });
///
/// let service = GreetService { fallback: Slot::new() };
/// let out = service.invoke("greet", &[Value::from("Rust")]).unwrap();
/// assert_eq!(out, Value::from("Hello, Rust!"));
/// assert!(service.invoke("missing", &[]).is_err());
/// ```
#[macro_export]
macro_rules! impl_bean {
  (
    $ty:ty {
      methods { $($method_name:literal => $method:ident),* $(,)? }
      $(fields { $($field_name:literal => $field:ident),* $(,)? })?
    }
  ) => {
    impl $crate::bean::Bean for $ty {
      fn invoke(
        &self,
        method: &str,
        args: &[$crate::bean::Value],
      ) -> Result<$crate::bean::Value, $crate::error::InvokeError> {
        match method {
          $($method_name => self.$method(args),)*
          _ => Err($crate::error::InvokeError::UnknownMethod {
            type_name: ::std::any::type_name::<$ty>().to_string(),
            method: method.to_string(),
          }),
        }
      }

      fn inject(&self, field: &str, dependency: $crate::bean::BeanRef) -> bool {
        match field {
          $($($field_name => {
            self.$field.inject(dependency);
            true
          })*)?
          _ => {
            let _ = dependency;
            false
          }
        }
      }

      fn as_any(&self) -> &dyn ::std::any::Any {
        self
      }
    }
  };
}
