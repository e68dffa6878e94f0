mod pad3d;

use criterion::criterion_group;

criterion_group!(benches, pad3d::forward, pad3d::backward);
