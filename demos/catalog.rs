use opcalc::{available_operations, create_operation, operation_metadata, Operation};

fn main() {
    env_logger::init();

    println!("Catalog ({} operations):", available_operations().len());
    for name in available_operations() {
        let meta = operation_metadata(name).unwrap();
        println!(
            "  {:<20} {:<20} {:?}  {}",
            meta.name, meta.display_name, meta.arity, meta.description
        );
    }

    // Evaluate a few entries
    for (name, x, y) in [("add", 2.0, 3.0), ("power", 2.0, 10.0), ("percentage", 50.0, 200.0)] {
        let op = create_operation(name).unwrap();
        let result = op.as_binary().unwrap().execute(x, y).unwrap();
        println!("{}({}, {}) = {}", name, x, y, result);
    }

    let absolute = create_operation("absolute").unwrap();
    if let Operation::Unary(op) = &absolute {
        println!("absolute(-5) = {}", op.execute(-5.0).unwrap());
    }

    // Domain errors surface to the caller
    let divide = create_operation("divide").unwrap();
    match divide.as_binary().unwrap().execute(10.0, 0.0) {
        Ok(result) => println!("divide(10, 0) = {}", result),
        Err(err) => println!("divide(10, 0) failed: {}", err),
    }

    println!("Catalog walkthrough complete!");
}
