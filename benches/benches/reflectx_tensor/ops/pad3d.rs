use criterion::{black_box, Criterion};
use reflectx_core::{device::Device, dtype::DType, padding::Pad3d};
use reflectx_tensor::{ReflectionPad3d, Tensor};

// (N, C, D, H, W) shapes paired with a padding spec
const CASES: [([usize; 5], usize, &str); 2] = [([1, 4, 8, 16, 16], 2, "small"), ([2, 8, 16, 32, 32], 3, "medium")];

fn make_input(shape: &[usize], dtype: DType) -> Tensor {
    let size: usize = shape.iter().product();
    let data: Vec<f32> = (0..size).map(|i| (i % 10) as f32 / 10.0).collect();

    Tensor::new_with_spec(data, shape, Device::CPU, dtype).unwrap()
}

pub fn forward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pad3d/forward");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for dtype in [DType::F32, DType::F64] {
        for (shape, pad, size_name) in CASES.iter() {
            let input = make_input(shape, dtype);
            let op = ReflectionPad3d::new(Pad3d::uniform(*pad));

            group.bench_function(format!("{}/{}", dtype.as_str(), size_name), |b| {
                b.iter(|| black_box(op.forward(&input)).unwrap())
            });
        }
    }

    group.finish();
}

pub fn backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pad3d/backward");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for dtype in [DType::F32, DType::F64] {
        for (shape, pad, size_name) in CASES.iter() {
            let input = make_input(shape, dtype);
            let op = ReflectionPad3d::new(Pad3d::uniform(*pad));
            let grad_output = op.forward(&input).unwrap();

            group.bench_function(format!("{}/{}", dtype.as_str(), size_name), |b| {
                b.iter(|| black_box(op.backward(&grad_output, &input)).unwrap())
            });
        }
    }

    group.finish();
}
