/*!
# The PC Link

Programs reach the robot as lines of text. The robot sends `%` and waits
for the PC to answer `&`, then replies `OK`. Every line after that is
squeezed and echoed back so the PC can show what was stored.

A transfer ends with a line starting with `@`. A line that arrives
without its terminator also ends the transfer, keeping everything
stored so far.
*/

pub mod P {
    /*!
    ## `%Pn` Selects store n, 0 to 3, for the program being downloaded.
    Any other value selects store 0.
    ```text
    %P2
    ```
    */
}

pub mod B {
    /*!
    ## `%B` Read buttons. Accepted and ignored.
    */
}

pub mod L {
    /*!
    ## `%L` Set LEDs. Accepted and ignored.
    */
}

pub mod T {
    /*!
    ## `%T` Show text. Accepted and ignored.
    */
}

pub mod X {
    /*!
    ## `%X` Execute a program. Accepted and ignored.
    */
}

pub mod S {
    /*!
    ## `%S` Read a sensor. Accepted and ignored.
    */
}
