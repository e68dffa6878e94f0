pub mod pad3d;
