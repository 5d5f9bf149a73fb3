use criterion::{criterion_group, criterion_main, Criterion};
use geoshape::scalar::{LineString, MultiPoint, Point};
use geoshape::{GeometryCollection, Shape, ShapeTrait};

fn create_data() -> GeometryCollection {
    (0..1000)
        .map(|i| {
            let i = i as f64;
            let children: GeometryCollection = vec![
                Shape::from(Point::new(i, -i)),
                Shape::from(LineString::from(vec![(i, 0.5), (i + 0.25, 1.5)])),
                Shape::from(MultiPoint::from(vec![Point::new(0.1, i), Point::new(i, 0.1)])),
            ]
            .into();
            Shape::from(children)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let text = data.to_wkt().unwrap();

    c.bench_function("write nested GeometryCollection to WKT", |b| {
        b.iter(|| {
            let _ = data.to_wkt().unwrap();
        })
    });
    c.bench_function("parse WKT to nested GeometryCollection", |b| {
        b.iter(|| {
            let _ = GeometryCollection::from_wkt(&text).unwrap();
        })
    });
    c.bench_function("cross nested GeometryCollection with a line", |b| {
        let line = Shape::from(LineString::from(vec![(0., 1.), (1000., 1.)]));
        b.iter(|| {
            let _ = data.crossing(&line).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
