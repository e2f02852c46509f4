pub mod portals;
