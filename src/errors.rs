// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::error_chain;

error_chain! {

    errors {
        // A maze needs at least one row and one column of cells.
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: width and height must be positive and their product representable",
                    width, height)
        }

        // Every generation attempt finished without a cell satisfying the end placement policy.
        // The maze is still fully connected, it just has no end marker.
        EndUnresolved(attempts: usize) {
            description("no end cell placed")
            display("no cell satisfied the end placement policy after {} generation attempts", attempts)
        }
    }
}
