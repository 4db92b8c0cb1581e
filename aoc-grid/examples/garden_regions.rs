//! Region fencing walk-through using the grid indexer.
//!
//! Run with: cargo run --example garden_regions
//!
//! Every plot in the garden holds one plant type. Orthogonally connected plots
//! of the same type form a region whose fence price is area times perimeter.
//! Perimeter edges are found with unbounded neighbour enumeration, so edges
//! facing out of the garden are counted without special cases.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use aoc_grid::{Connectivity, Grid};

const GARDEN: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

/// Area and perimeter of one region
#[derive(Debug)]
struct Region {
    plant: char,
    area: usize,
    perimeter: usize,
}

fn regions(grid: &Grid<char>) -> Result<Vec<Region>> {
    let indexer = grid.indexer();
    let mut seen = vec![false; indexer.len()];
    let mut regions = Vec::new();

    for start in 0..indexer.len() {
        if seen[start] {
            continue;
        }
        let plant = *grid.get(start).context("start plot outside garden")?;
        let mut region = Region {
            plant,
            area: 0,
            perimeter: 0,
        };

        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(plot) = queue.pop_front() {
            region.area += 1;

            let coords = indexer.index_to_coords(plot as isize)?;
            for neighbor in indexer.neighbor_coords_unbounded(&coords, Connectivity::Orthogonal)? {
                let same_plant = indexer.is_valid_coords(&neighbor)
                    && grid.get_at(&neighbor)? == &plant;
                if !same_plant {
                    region.perimeter += 1;
                    continue;
                }
                let index = indexer.coords_to_index(&neighbor)?;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(index);
                }
            }
        }
        regions.push(region);
    }
    Ok(regions)
}

fn main() -> Result<()> {
    let grid = Grid::parse_chars(GARDEN)?;
    println!("Garden of {}x{} plots", grid.width(), grid.height());

    let regions = regions(&grid)?;
    for region in &regions {
        println!(
            "  {}: area {:>3}, perimeter {:>3}",
            region.plant, region.area, region.perimeter
        );
    }

    let price: usize = regions
        .iter()
        .map(|region| region.area * region.perimeter)
        .sum();
    println!("{} regions, total fence price {}", regions.len(), price);
    assert_eq!(price, 1930);

    Ok(())
}
