use std::sync::Arc;

use heddle::{
  impl_bean, Bean, ComponentType, Container, InvokeError, MethodDescriptor, Stereotype,
  TypeCatalog, TypeKey, Value,
};

// The target: a service whose `transfer` method we want to audit.
struct LedgerService;

impl LedgerService {
  fn transfer(&self, args: &[Value]) -> Result<Value, InvokeError> {
    let amount = match args.first() {
      Some(Value::Int(n)) => *n,
      _ => 0,
    };
    println!("  transferring {} credits", amount);
    Ok(Value::from("transferred"))
  }

  fn balance(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    Ok(Value::Int(1_000))
  }
}

impl_bean!(LedgerService {
  methods { "transfer" => transfer, "balance" => balance }
});

// The aspect: one pointcut, one before, one after.
struct AuditAspect;

impl AuditAspect {
  fn open_audit(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    println!("  [audit] opening record");
    Ok(Value::Null)
  }

  fn close_audit(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    println!("  [audit] closing record");
    Ok(Value::Null)
  }
}

impl_bean!(AuditAspect {
  methods { "open_audit" => open_audit, "close_audit" => close_audit }
});

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let mut catalog = TypeCatalog::new();
  catalog.register(
    ComponentType::new("demo.LedgerService")
      .with_stereotype(Stereotype::Service)
      .with_constructor(|| Arc::new(LedgerService)),
  );
  catalog.register(
    ComponentType::new("demo.AuditAspect")
      .with_stereotype(Stereotype::Aspect)
      .with_method(
        MethodDescriptor::new("around_transfer").with_pointcut("demo.LedgerService.transfer()"),
      )
      .with_method(MethodDescriptor::new("open_audit").with_before("around_transfer()"))
      .with_method(MethodDescriptor::new("close_audit").with_after("around_transfer()"))
      .with_constructor(|| Arc::new(AuditAspect)),
  );

  let container = Container::bootstrap(catalog).expect("container startup");
  let ledger = container
    .get_instance(&TypeKey::new("demo.LedgerService"))
    .expect("ledger should be registered");

  // The intercepted method runs between the two advice calls.
  println!("calling the woven method:");
  ledger
    .invoke("transfer", &[Value::Int(250)])
    .expect("transfer should succeed");

  // Any other method forwards straight to the target.
  println!("calling an ordinary method:");
  let balance = ledger.invoke("balance", &[]).expect("balance should work");
  println!("  balance is {}", balance);
}
