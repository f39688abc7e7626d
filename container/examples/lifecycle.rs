use std::sync::Arc;

use heddle::{
  impl_bean, Bean, ComponentType, Container, InvokeError, Slot, Stereotype, TypeCatalog, TypeKey,
  TypeRef, Value,
};

// 1. Define the components. Beans dispatch by method name, so the container
//    can treat every instance, proxied or not, uniformly.
struct Inventory;

impl Inventory {
  fn count(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    Ok(Value::Int(42))
  }
}

impl_bean!(Inventory { methods { "count" => count } });

// 2. A component that depends on the inventory through an injectable field.
struct StockReport {
  inventory: Slot,
}

impl StockReport {
  fn summary(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    match self.inventory.get() {
      Some(inventory) => {
        let count = inventory.invoke("count", &[])?;
        Ok(Value::Str(format!("{} item(s) in stock", count)))
      }
      None => Ok(Value::from("inventory unavailable")),
    }
  }
}

impl_bean!(StockReport {
  methods { "summary" => summary }
  fields { "inventory" => inventory }
});

fn main() {
  // 3. The discovery layer declares what exists. Types without a managed
  //    stereotype would be ignored entirely.
  let mut catalog = TypeCatalog::new();
  catalog.register(
    ComponentType::new("demo.Inventory")
      .with_stereotype(Stereotype::Service)
      .with_constructor(|| Arc::new(Inventory)),
  );
  catalog.register(
    ComponentType::new("demo.StockReport")
      .with_stereotype(Stereotype::Component)
      .with_field("inventory", TypeRef::concrete("demo.Inventory"))
      .with_constructor(|| {
        Arc::new(StockReport {
          inventory: Slot::new(),
        })
      }),
  );

  // 4. One call runs the whole pipeline: instantiate, weave (no aspects
  //    here, so a no-op), inject.
  let container = Container::bootstrap(catalog).expect("container startup");

  // 5. Resolve by type identity and use the wired component.
  let report = container
    .get_instance(&TypeKey::new("demo.StockReport"))
    .expect("report should be registered");
  let summary = report.invoke("summary", &[]).expect("summary should work");
  println!("{}", summary);
}
