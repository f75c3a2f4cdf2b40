use futures_sequence::future::{self, resolve, Future};
use futures_sequence::sequence::{each, each_async, map, map_async};

use async_std::task;
use std::error::Error;
use std::pin::Pin;
use std::time::{Duration, Instant};

type Element = Pin<Box<dyn Future<Output = Result<u64, Box<dyn Error>>>>>;

#[async_std::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let doubled = map(resolve(elements()), double).await?;
    println!("map:        {doubled:?} in {:?}", start.elapsed());

    let start = Instant::now();
    let doubled = map_async(resolve(elements()), double).await?;
    println!("map_async:  {doubled:?} in {:?}", start.elapsed());

    let start = Instant::now();
    let original = each(resolve(elements()), |n: &u64| log(*n)).await?;
    println!("each:       {original:?} in {:?}", start.elapsed());

    let start = Instant::now();
    let original = each_async(resolve(elements()), |n: &u64| log(*n)).await?;
    println!("each_async: {original:?} in {:?}", start.elapsed());

    // The first error is returned as-is.
    let res = map(resolve(elements()), |n| async move {
        match n {
            3 => Err::<u64, Box<dyn Error>>("refusing to double 3".into()),
            n => Ok(n * 2),
        }
    })
    .await;
    println!("failing map: {:?}", res.map_err(|err| err.to_string()));
    Ok(())
}

/// `[1, deferred 2, 3, deferred 4]`: plain values mixed with values which
/// arrive later.
fn elements() -> Vec<Element> {
    vec![
        Box::pin(resolve(1)),
        Box::pin(deferred(2)),
        Box::pin(resolve(3)),
        Box::pin(deferred(4)),
    ]
}

async fn deferred(n: u64) -> Result<u64, Box<dyn Error>> {
    task::sleep(Duration::from_millis(20 * n)).await;
    Ok(n)
}

async fn double(n: u64) -> Result<u64, Box<dyn Error>> {
    task::sleep(Duration::from_millis(10)).await;
    Ok(n * 2)
}

fn log(n: u64) -> future::Resolved<(), Box<dyn Error>> {
    println!("  saw {n}");
    resolve(())
}
