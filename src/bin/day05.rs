use aoc2018::io::read_source;
use aoc2018::polymer::{best_variant, reduce_counting_passes, Polymer};
use aoc2018::Inputs;

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    env_logger::init();

    let inputs = Inputs::from_args(std::env::args_os().skip(1));

    let example = read_source(&inputs.example)?;
    let input = read_source(&inputs.input)?;

    let part_one_example = reduced(example.clone(), "example");
    let part_one = reduced(input.clone(), "input").len();

    let part_two_example = shortest(&example, "example");
    let part_two = shortest(&input, "input");

    println!("Reduced: {}", part_one_example);
    println!("Reduced: {}", part_one);
    println!("Shortest: {}", part_two_example);
    println!("Shortest: {}", part_two);

    Ok(())
}

fn reduced(polymer: Polymer, name: &str) -> Polymer {
    let before = polymer.len();
    let reduction = reduce_counting_passes(polymer);

    log::debug!(
        "{}: reduced {} units to {} in {} passes",
        name,
        before,
        reduction.polymer.len(),
        reduction.passes
    );

    reduction.polymer
}

fn shortest(polymer: &Polymer, name: &str) -> usize {
    match best_variant(polymer) {
        Some((letter, len)) => {
            log::debug!(
                "{}: removing {} allows reducing down to {}",
                name,
                letter as char,
                len
            );
            len
        }
        None => 0,
    }
}
