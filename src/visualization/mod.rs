pub mod vis3d;
