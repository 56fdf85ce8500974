use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate, TimeZone, Utc};
use pantry_engine::{
    Dataset, DishName, EngineConfig, InventoryItem, InventoryOptimizer, MaterialName, OrderRecord,
    RecipeLine, forecast,
};

/// `dishes` dishes, each using 4 of `dishes` materials, with a year of daily sales.
fn synthetic_dataset(dishes: usize) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut orders = Vec::with_capacity(dishes * 365);
    for d in 0..dishes {
        for i in 0..365u64 {
            orders.push(OrderRecord {
                date: start + Days::new(i),
                dish_name: DishName::new(format!("dish-{d:04}")),
                quantity_sold: ((d as u64 * 7 + i) % 40) as u32,
                revenue: 0.0,
            });
        }
    }

    let mut recipes = Vec::with_capacity(dishes * 4);
    for d in 0..dishes {
        for k in 0..4 {
            recipes.push(RecipeLine::new(
                format!("dish-{d:04}"),
                format!("material-{:04}", (d + k * 13) % dishes),
                0.05 + k as f64 * 0.1,
            ));
        }
    }

    let inventory = (0..dishes)
        .map(|m| InventoryItem {
            material_name: MaterialName::new(format!("material-{m:04}")),
            current_stock: (m % 50) as f64,
            unit: "kg".to_string(),
            expiry_date: start + Days::new(365 + (m % 10) as u64),
            cost_per_unit: 1.0 + (m % 17) as f64,
            minimum_stock_level: 5.0,
            incoming_stock: 0.0,
        })
        .collect();

    Dataset {
        orders,
        recipes,
        inventory,
    }
}

fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");
    let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for dishes in [10usize, 100, 500] {
        let data = synthetic_dataset(dishes);
        let cfg = EngineConfig::default().with_days_ahead(30);
        group.throughput(Throughput::Elements(data.orders.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(dishes), &data, |b, data| {
            b.iter(|| forecast(black_box(&data.orders), [], &cfg, reference).unwrap());
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizer_run");
    let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let optimizer = InventoryOptimizer::new(EngineConfig::default().with_days_threshold(7));

    for dishes in [10usize, 100, 500] {
        let data = synthetic_dataset(dishes);
        group.bench_with_input(BenchmarkId::from_parameter(dishes), &data, |b, data| {
            b.iter(|| optimizer.run(black_box(data), reference, at).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_forecast, bench_full_run);
criterion_main!(benches);
